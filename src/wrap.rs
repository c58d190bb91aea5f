//! Adapters between user closures and the solvers.
//!
//! Solvers never call closures directly.  They ask for `f(x)` through
//! [`RealFnEval`] and, when the method needs it, for `f'(x)` through
//! [`RealDfEval`].  Wrap a closure with [`RealFn`] or [`RealFnAndFirst`]
//! before handing it to a solver.

use std::cell::Cell;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps a function and its analytic first derivative.
pub struct RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<'a, F1, F2> RealFnEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<'a, F1, F2> RealDfEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Counts evaluations going through an inner evaluator.
///
/// Handy for checking how much work a solver did, e.g. that a zero iteration
/// budget stops before touching the function beyond the bracket check.
pub struct Counted<'a, E> {
    inner: &'a E,
    f_calls: Cell<usize>,
    df_calls: Cell<usize>,
}

impl<'a, E> Counted<'a, E> {
    pub fn new(inner: &'a E) -> Counted<'a, E> {
        Counted {
            inner,
            f_calls: Cell::new(0),
            df_calls: Cell::new(0),
        }
    }

    /// Number of f(x) evaluations so far.
    pub fn f_calls(&self) -> usize {
        self.f_calls.get()
    }

    /// Number of df(x) evaluations so far.
    pub fn df_calls(&self) -> usize {
        self.df_calls.get()
    }
}

impl<'a, E> RealFnEval for Counted<'a, E>
where
    E: RealFnEval,
{
    fn eval_f(&self, x: f64) -> f64 {
        self.f_calls.set(self.f_calls.get() + 1);
        self.inner.eval_f(x)
    }
}

impl<'a, E> RealDfEval for Counted<'a, E>
where
    E: RealDfEval,
{
    fn eval_df(&self, x: f64) -> f64 {
        self.df_calls.set(self.df_calls.get() + 1);
        self.inner.eval_df(x)
    }
}
