//! Classical numerical recipes.
//!
//! * [`solver`]: scalar root finding by bisection, false position,
//!   Newton-Raphson and the modified secant method.
//! * [`bracket`]: intervals with a sign change, and a scanner to find them.
//! * [`linear`]: naive Gaussian elimination.
//! * [`ode`]: Euler, modified Euler and RK4 for `y' = f(x, y)`.
//!
//! Every call is self-contained: no global state, nothing cached between
//! calls.  Diagnostics go through the `log` facade; install any logger to see
//! them.
//!
//! # Examples
//! Scan for sign changes, then polish each one with bisection:
//!
//! ```
//! use numrecipes::bracket::{Bounds, BracketGenerator};
//! use numrecipes::config::SolverConfig;
//! use numrecipes::solver::bisection;
//! use numrecipes::wrap::RealFn;
//!
//! // roots at x=-2 and x=2
//! let in_f = |x: f64| x * x - 4.0;
//! let f = RealFn::new(&in_f);
//!
//! let cfg = SolverConfig::default().with_tol(1e-10);
//! let roots: Vec<f64> = BracketGenerator::new(&f, Bounds::new(-5.0, 5.0), 0.4)
//!     .map(|b| bisection(&f, &b, &cfg).expect("root"))
//!     .collect();
//!
//! assert_eq!(roots.len(), 2);
//! assert!((roots[0] + 2.0).abs() < 1e-9);
//! assert!((roots[1] - 2.0).abs() < 1e-9);
//! ```

pub mod bracket;
pub mod config;
pub mod convergence;
pub mod linear;
pub mod ode;
pub mod solver;
pub mod wrap;

pub use config::{ExhaustionPolicy, SolverConfig};
pub use solver::RootError;
