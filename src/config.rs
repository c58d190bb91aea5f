//! Solver configuration shared by all root finders.

use thiserror::Error;

/// What a solver does when it runs out of iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExhaustionPolicy {
    /// Hand back the current estimate and log a warning.
    ReturnBestEffort,
    /// Fail with `RootError::NonConvergence`.
    RaiseOnExhaustion,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0, got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid perturbation: must be finite and non-zero, got {got}")]
    InvalidDelta { got: f64 },
}

/// Tolerance, iteration budget and method knobs for a single solve.
///
/// `tol` is compared against |f(x)| by the bracket methods and against the
/// step |x_new - x| by the open methods.  `delta` is only read by the
/// modified secant method.
///
/// Leaving `exhaustion` unset keeps each method's own behaviour: bisection
/// returns its best estimate, every other method fails.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    pub tol: f64,
    pub max_iter: usize,
    pub delta: f64,
    pub exhaustion: Option<ExhaustionPolicy>,
}

impl SolverConfig {
    pub const DEFAULT_TOL: f64 = 1e-5;
    pub const DEFAULT_MAX_ITER: usize = 1000;
    pub const DEFAULT_DELTA: f64 = 1e-4;

    pub fn new(tol: f64, max_iter: usize) -> SolverConfig {
        SolverConfig {
            tol,
            max_iter,
            ..SolverConfig::default()
        }
    }

    pub fn with_tol(mut self, tol: f64) -> SolverConfig {
        self.tol = tol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> SolverConfig {
        self.max_iter = max_iter;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> SolverConfig {
        self.delta = delta;
        self
    }

    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> SolverConfig {
        self.exhaustion = Some(policy);
        self
    }

    /// Policy in effect, falling back to the method's own default.
    pub(crate) fn exhaustion_or(&self, native: ExhaustionPolicy) -> ExhaustionPolicy {
        self.exhaustion.unwrap_or(native)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(ConfigError::InvalidTolerance { got: self.tol });
        }
        if !self.delta.is_finite() || self.delta == 0.0 {
            return Err(ConfigError::InvalidDelta { got: self.delta });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            tol: Self::DEFAULT_TOL,
            max_iter: Self::DEFAULT_MAX_ITER,
            delta: Self::DEFAULT_DELTA,
            exhaustion: None,
        }
    }
}
