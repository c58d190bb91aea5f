use super::{exhausted, RootError};
use crate::config::ExhaustionPolicy;
use crate::convergence::IsConverged;
use log::{debug, trace};

/// Driver for iterative root finders.
///
/// Allows for arbitrary iteration functions and converge criteria.  The
/// `iterate` step maps the current x to `(x_new, f(x))`; iteration stops as
/// soon as `finish` accepts the pair of iterates.  After `max_iter` steps the
/// exhaustion policy decides between the last iterate and an error.
pub(crate) fn iterative_root_find<F, I, C>(
    f: &F,
    iterate: &I,
    start: f64,
    finish: &C,
    max_iter: usize,
    policy: ExhaustionPolicy,
    method: &'static str,
) -> Result<f64, RootError>
where
    I: Fn(&F, f64) -> Result<(f64, f64), RootError>,
    C: IsConverged,
{
    if !start.is_finite() {
        return Err(RootError::NonFinite { x: start });
    }

    let mut x_pre = start;

    for it in 1..=max_iter {
        let (x_cur, f_pre) = iterate(f, x_pre)?;
        trace!("{} iteration {}: x={} f(x_pre)={}", method, it, x_cur, f_pre);

        if finish.is_converged(x_pre, x_cur, f_pre) {
            debug!("{} converged after {} iterations: x={}", method, it, x_cur);
            return Ok(x_cur);
        }

        x_pre = x_cur;
    }

    exhausted(method, max_iter, x_pre, policy)
}
