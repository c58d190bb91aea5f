//! Root finding algorithms.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this.
//!
//! Bracket methods ([`bisection`], [`false_position`]) need a [`Bounds`] over
//! which f changes sign and stop on the residual |f(x)|.  Open methods
//! ([`newton_raphson`], [`modified_secant`]) start from a single guess, stop
//! on the step size |x_new - x| and may wander off anywhere.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use numrecipes::config::SolverConfig;
//! use numrecipes::solver::newton_raphson;
//! use numrecipes::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let in_df = |x: f64| -2.0*x + 2.0;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! let cfg = SolverConfig::new(1e-9, 20);
//! let root = newton_raphson(&f, 3.0, &cfg).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```
//!
//! Using False Position:
//!
//! ```
//! use numrecipes::bracket::Bounds;
//! use numrecipes::config::SolverConfig;
//! use numrecipes::solver::false_position;
//! use numrecipes::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let cfg = SolverConfig::new(1e-12, 100);
//! let root = false_position(&f, &Bounds::new(2.0, 3.0), &cfg).expect("root");
//!
//! assert!((root-2.41421356237).abs() < 1e-9);
//! ```

mod driver;

use crate::bracket::{is_sign_change, Bounds};
use crate::config::{ConfigError, ExhaustionPolicy, SolverConfig};
use crate::convergence::{DeltaX, IsConverged, Residual};
use crate::wrap::{RealDfEval, RealFnEval};
use driver::iterative_root_find;
use log::{debug, warn};
use thiserror::Error;

/// Root finding error conditions.
///
/// To help with diagnostics, these errors typically return the last relevant
/// `x` position.
#[derive(Debug, Error)]
pub enum RootError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// f(a) and f(b) do not strictly differ in sign.
    #[error("no sign change on [{a}, {b}]: f(a)={f_a}, f(b)={f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Derivative went to zero for method that depends on it to determine next
    /// step.
    #[error("derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    /// Finite-difference slope is flatter than the tolerance.
    #[error("estimated derivative too small at x={x}: slope={slope}")]
    DerivativeTooSmall { x: f64, slope: f64 },

    /// The relative perturbation delta*x collapsed to zero.
    #[error("perturbation vanishes at x={x}; cannot estimate derivative")]
    DegeneratePerturbation { x: f64 },

    /// The solver computed a NaN or infinity.
    #[error("non-finite value reached from x={x}")]
    NonFinite { x: f64 },

    /// Iteration limit was reached.
    #[error("no convergence after {iterations} iterations, last x={last_x}")]
    NonConvergence { iterations: usize, last_x: f64 },
}

/// Applies the exhaustion policy once the iteration budget is spent.
fn exhausted(
    method: &'static str,
    iterations: usize,
    last_x: f64,
    policy: ExhaustionPolicy,
) -> Result<f64, RootError> {
    match policy {
        ExhaustionPolicy::ReturnBestEffort => {
            warn!(
                "{}: maximum number of iterations ({}) reached, returning x={}",
                method, iterations, last_x
            );
            Ok(last_x)
        }
        ExhaustionPolicy::RaiseOnExhaustion => {
            debug!("{}: no convergence after {} iterations", method, iterations);
            Err(RootError::NonConvergence { iterations, last_x })
        }
    }
}

fn eval_finite<F>(f: &F, x: f64) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    let f_x = f.eval_f(x);
    if !f_x.is_finite() {
        return Err(RootError::NonFinite { x });
    }
    Ok(f_x)
}

/// Evaluates both ends and insists on a strict sign change.
fn checked_bracket<F>(f: &F, bounds: &Bounds) -> Result<(f64, f64), RootError>
where
    F: RealFnEval,
{
    let f_a = eval_finite(f, bounds.a)?;
    let f_b = eval_finite(f, bounds.b)?;
    if !is_sign_change(f_a, f_b) {
        return Err(RootError::InvalidBracket {
            a: bounds.a,
            b: bounds.b,
            f_a,
            f_b,
        });
    }
    Ok((f_a, f_b))
}

/// Root finding via Bisection Method.
///
/// It always converges given a valid starting bracket, but the speed of
/// convergence is linear.  Stops once |f(mid)| <= `cfg.tol`; the estimate is
/// always the midpoint of the current window and so never leaves `bounds`.
///
/// Running out of iterations is not an error by default: the current midpoint
/// is returned and a warning is logged.  Set
/// [`ExhaustionPolicy::RaiseOnExhaustion`] to fail instead.
pub fn bisection<F>(f: &F, bounds: &Bounds, cfg: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    cfg.validate()?;
    let (mut f_a, _) = checked_bracket(f, bounds)?;
    let finish = Residual::new(cfg.tol);

    let mut window = bounds.clone();
    let mut mid = window.middle();
    let mut f_mid = eval_finite(f, mid)?;
    let mut it = 0;

    while !finish.is_converged(mid, mid, f_mid) {
        if it == cfg.max_iter {
            return exhausted(
                "bisection",
                it,
                mid,
                cfg.exhaustion_or(ExhaustionPolicy::ReturnBestEffort),
            );
        }
        it += 1;

        let (next, next_f_a) = window.split(mid, f_a, f_mid);
        window = next;
        f_a = next_f_a;

        mid = window.middle();
        f_mid = eval_finite(f, mid)?;
    }

    debug!("bisection converged after {} iterations: x={}", it, mid);
    Ok(mid)
}

/// Root finding via the False Position (regula falsi) Method.
///
/// Each step cuts the bracket at the x-intercept of the chord through
/// (a, f(a)) and (b, f(b)).  Stops once |f(c)| < `cfg.tol` or the bracket
/// itself is narrower than `cfg.tol`.
///
/// On convex or concave functions one endpoint tends to stay put and
/// convergence slows to linear; this is inherent to the classic method.
pub fn false_position<F>(f: &F, bounds: &Bounds, cfg: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    cfg.validate()?;
    let (mut f_a, mut f_b) = checked_bracket(f, bounds)?;

    let (mut a, mut b) = (bounds.a, bounds.b);
    let mut c = bounds.middle();

    for it in 1..=cfg.max_iter {
        c = b - f_b * (b - a) / (f_b - f_a);
        if !c.is_finite() {
            return Err(RootError::NonFinite { x: b });
        }
        let f_c = eval_finite(f, c)?;

        if f_c.abs() < cfg.tol {
            debug!("false_position converged after {} iterations: x={}", it, c);
            return Ok(c);
        }

        if is_sign_change(f_a, f_c) {
            b = c;
            f_b = f_c;
        } else {
            a = c;
            f_a = f_c;
        }

        if (b - a).abs() < cfg.tol {
            debug!("false_position bracket collapsed after {} iterations: x={}", it, c);
            return Ok(c);
        }
    }

    exhausted(
        "false_position",
        cfg.max_iter,
        c,
        cfg.exhaustion_or(ExhaustionPolicy::RaiseOnExhaustion),
    )
}

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has quadratic convergence.  Convergence is judged on
/// the step |x_new - x| < `cfg.tol`, not on the residual.
///
/// This algorithm requires the first derivative of f(x).  A derivative of
/// exactly zero at any iterate is an error; there is no fallback.
///
/// * If analytically computed derivatives are not available, consider
///   [`modified_secant`].
pub fn newton_raphson<F>(f: &F, start: f64, cfg: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    cfg.validate()?;
    let finish = DeltaX::new(cfg.tol);
    iterative_root_find(
        f,
        &nr_iteration,
        start,
        &finish,
        cfg.max_iter,
        cfg.exhaustion_or(ExhaustionPolicy::RaiseOnExhaustion),
        "newton_raphson",
    )
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative evaluates to zero or either evaluation is not finite.  Returns
/// (x_new, f(x)) otherwise.
fn nr_iteration<F>(f: &F, x: f64) -> Result<(f64, f64), RootError>
where
    F: RealFnEval + RealDfEval,
{
    let denom = f.eval_df(x);
    if denom == 0.0 {
        return Err(RootError::ZeroDerivative { x });
    }
    // an infinite slope gives a zero step, which would pass as convergence
    if !denom.is_finite() {
        return Err(RootError::NonFinite { x });
    }
    let f_x = eval_finite(f, x)?;
    let x_new = x - f_x / denom;
    if !x_new.is_finite() {
        return Err(RootError::NonFinite { x });
    }
    Ok((x_new, f_x))
}

/// Root finding using the Modified Secant Method.
///
/// Newton's iteration with the derivative replaced by a forward difference
/// over a relative perturbation:
///
/// `f'(x) ~ (f(x + delta*x) - f(x)) / (delta*x)`
///
/// with `delta` taken from `cfg`.  Superlinear near a simple root, but
/// sensitive to the choice of `delta`.  The perturbation vanishes at x = 0, so
/// a start (or iterate) at zero fails with
/// [`RootError::DegeneratePerturbation`].  A slope flatter than `cfg.tol` fails
/// with [`RootError::DerivativeTooSmall`].
pub fn modified_secant<F>(f: &F, start: f64, cfg: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    cfg.validate()?;
    let finish = DeltaX::new(cfg.tol);
    let (delta, min_slope) = (cfg.delta, cfg.tol);
    let iterate = |f: &F, x: f64| secant_iteration(f, x, delta, min_slope);

    iterative_root_find(
        f,
        &iterate,
        start,
        &finish,
        cfg.max_iter,
        cfg.exhaustion_or(ExhaustionPolicy::RaiseOnExhaustion),
        "modified_secant",
    )
}

/// Evaluate a single modified secant iteration.  Returns (x_new, f(x)).
fn secant_iteration<F>(f: &F, x: f64, delta: f64, min_slope: f64) -> Result<(f64, f64), RootError>
where
    F: RealFnEval,
{
    let h = delta * x;
    if h == 0.0 {
        return Err(RootError::DegeneratePerturbation { x });
    }

    let f_x = eval_finite(f, x)?;
    let slope = (f.eval_f(x + h) - f_x) / h;
    if !slope.is_finite() {
        return Err(RootError::NonFinite { x });
    }
    if slope.abs() < min_slope {
        return Err(RootError::DerivativeTooSmall { x, slope });
    }

    let x_new = x - f_x / slope;
    if !x_new.is_finite() {
        return Err(RootError::NonFinite { x });
    }
    Ok((x_new, f_x))
}
