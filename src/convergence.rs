//! Stopping criteria.
//!
//! Open methods stop on step size ([`DeltaX`]), bisection stops on the
//! residual ([`Residual`]).

pub trait IsConverged {
    fn is_converged(&self, x_pre: f64, x_cur: f64, f_cur: f64) -> bool;
}

/// Converged once successive iterates are closer than `epsilon_abs`.
pub struct DeltaX {
    epsilon_abs: f64,
}

impl DeltaX {
    pub fn new(epsilon_abs: f64) -> DeltaX {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        DeltaX { epsilon_abs }
    }
}

impl IsConverged for DeltaX {
    fn is_converged(&self, x_pre: f64, x_cur: f64, _f_cur: f64) -> bool {
        (x_pre - x_cur).abs() < self.epsilon_abs
    }
}

/// Converged once |f(x)| is within `epsilon_abs`, bound included.
pub struct Residual {
    epsilon_abs: f64,
}

impl Residual {
    pub fn new(epsilon_abs: f64) -> Residual {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        Residual { epsilon_abs }
    }
}

impl IsConverged for Residual {
    fn is_converged(&self, _x_pre: f64, _x_cur: f64, f_cur: f64) -> bool {
        f_cur.abs() <= self.epsilon_abs
    }
}
