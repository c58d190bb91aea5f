//! Fixed-step explicit integrators for the scalar initial value problem
//! `y' = f(x, y)`, `y(x0) = y0`.
//!
//! ```
//! use numrecipes::ode::runge_kutta_4;
//!
//! // y' = y, y(0) = 1  =>  y(1) = e
//! let traj = runge_kutta_4(&|_x: f64, y: f64| y, 0.0, 1.0, 0.1, 10).expect("integrated");
//! let (x, y) = traj.last();
//! assert!((x - 1.0).abs() < 1e-12);
//! assert!((y - std::f64::consts::E).abs() < 1e-5);
//! ```

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("invalid step size: must be finite and non-zero, got {h}")]
    InvalidStep { h: f64 },

    #[error("invalid initial value: x0={x0}, y0={y0} must be finite")]
    InvalidInitialValue { x0: f64, y0: f64 },

    #[error("non-finite state after step {step} at x={x}")]
    NonFinite { step: usize, x: f64 },
}

/// One-step integration schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Forward Euler, first order.
    Euler,
    /// Heun's predictor/corrector, second order.
    ModifiedEuler,
    /// Classical Runge-Kutta, fourth order.
    RungeKutta4,
}

impl Method {
    /// Global order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::ModifiedEuler => 2,
            Method::RungeKutta4 => 4,
        }
    }

    /// Advances `y` from `x` to `x + h`.
    pub fn step<F>(self, f: &F, x: f64, y: f64, h: f64) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        match self {
            Method::Euler => y + h * f(x, y),
            Method::ModifiedEuler => {
                let slope = f(x, y);
                let predictor = y + h * slope;
                y + (h / 2.0) * (slope + f(x + h, predictor))
            }
            Method::RungeKutta4 => {
                let k1 = h * f(x, y);
                let k2 = h * f(x + h / 2.0, y + k1 / 2.0);
                let k3 = h * f(x + h / 2.0, y + k2 / 2.0);
                let k4 = h * f(x + h, y + k3);
                y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
            }
        }
    }
}

/// Sampled solution: `x[i]`, `y[i]` for every step, starting at the initial
/// value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Final point; a trajectory always holds at least the initial value.
    pub fn last(&self) -> (f64, f64) {
        let i = self.len() - 1;
        (self.x[i], self.y[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Integrates `n` steps of width `h` from `(x0, y0)` with the given method.
///
/// The returned trajectory holds `n + 1` points.  A negative `h` integrates
/// backwards.
pub fn integrate<F>(
    method: Method,
    f: &F,
    x0: f64,
    y0: f64,
    h: f64,
    n: usize,
) -> Result<Trajectory, OdeError>
where
    F: Fn(f64, f64) -> f64,
{
    if !h.is_finite() || h == 0.0 {
        return Err(OdeError::InvalidStep { h });
    }
    if !(x0.is_finite() && y0.is_finite()) {
        return Err(OdeError::InvalidInitialValue { x0, y0 });
    }

    // grown on demand; a huge `n` may still end early on a blow-up
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    xs.push(x0);
    ys.push(y0);

    let (mut x, mut y) = (x0, y0);
    for i in 0..n {
        y = method.step(f, x, y, h);
        x += h;
        if !(x.is_finite() && y.is_finite()) {
            return Err(OdeError::NonFinite { step: i + 1, x });
        }
        xs.push(x);
        ys.push(y);
    }

    debug!("{:?}: {} steps of h={} reached x={}, y={}", method, n, h, x, y);
    Ok(Trajectory { x: xs, y: ys })
}

/// Forward Euler, see [`integrate`].
pub fn euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Result<Trajectory, OdeError>
where
    F: Fn(f64, f64) -> f64,
{
    integrate(Method::Euler, f, x0, y0, h, n)
}

/// Modified Euler (Heun), see [`integrate`].
pub fn modified_euler<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Result<Trajectory, OdeError>
where
    F: Fn(f64, f64) -> f64,
{
    integrate(Method::ModifiedEuler, f, x0, y0, h, n)
}

/// Classical fourth-order Runge-Kutta, see [`integrate`].
pub fn runge_kutta_4<F>(f: &F, x0: f64, y0: f64, h: f64, n: usize) -> Result<Trajectory, OdeError>
where
    F: Fn(f64, f64) -> f64,
{
    integrate(Method::RungeKutta4, f, x0, y0, h, n)
}
