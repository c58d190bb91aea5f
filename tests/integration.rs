use approx::assert_abs_diff_eq;

use numrecipes::bracket::{Bounds, BracketGenerator};
use numrecipes::config::{ExhaustionPolicy, SolverConfig};
use numrecipes::linear::gaussian_elimination;
use numrecipes::ode::{integrate, Method};
use numrecipes::solver::{bisection, false_position, modified_secant, newton_raphson, RootError};
use numrecipes::wrap::{RealFn, RealFnAndFirst};

#[test]
fn test_end_to_end() {
    // roots at 0, pi, 2pi, ...
    let f_inner = |x: f64| x.sin();

    // rootfinding determines via traits what is f(x), df(x), etc.
    // the RealFn wrapper annotates our closure accordingly.
    let f = RealFn::new(&f_inner);

    // search for root-holding brackets; grid kept off the roots themselves
    let window_size = 0.1;
    let bounds = Bounds::new(-0.05, 6.3);
    let cfg = SolverConfig::new(1e-12, 100);

    let mut found = 0;
    for (i, b) in BracketGenerator::new(&f, bounds, window_size).enumerate() {
        let computed_root = bisection(&f, &b, &cfg).expect("found root");

        // demonstrate that we found root
        let pi = std::f64::consts::PI;
        let expected_root = (i as f64) * pi;

        assert!(
            (computed_root - expected_root).abs() < 1e-9,
            "got={}, wanted={}",
            computed_root,
            expected_root
        );
        found += 1;
    }
    assert_eq!(found, 3);
}

#[test]
fn test_all_methods_agree_on_parabola() {
    let in_f = |x: f64| x * x - 4.0;
    let in_df = |x: f64| 2.0 * x;
    let f = RealFnAndFirst::new(&in_f, &in_df);
    let cfg = SolverConfig::default();

    let roots = [
        bisection(&f, &Bounds::new(1.0, 3.0), &cfg).expect("bisection"),
        false_position(&f, &Bounds::new(1.0, 3.0), &cfg).expect("false position"),
        newton_raphson(&f, 1.0, &cfg).expect("newton"),
        modified_secant(&f, 2.5, &cfg).expect("secant"),
    ];
    for &root in roots.iter() {
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-5);
    }

    // and the negative root from the other side
    let roots = [
        bisection(&f, &Bounds::new(-3.0, -1.5), &cfg).expect("bisection"),
        false_position(&f, &Bounds::new(-3.0, -1.5), &cfg).expect("false position"),
        newton_raphson(&f, -1.0, &cfg).expect("newton"),
        modified_secant(&f, -2.5, &cfg).expect("secant"),
    ];
    for &root in roots.iter() {
        assert_abs_diff_eq!(root, -2.0, epsilon = 1e-5);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let in_f = |x: f64| x.cos() - x * x * x;
    let in_df = |x: f64| -x.sin() - 3.0 * x * x;
    let f = RealFnAndFirst::new(&in_f, &in_df);
    let cfg = SolverConfig::new(1e-10, 500);
    let bounds = Bounds::new(0.0, 1.0);

    let runs = || {
        [
            bisection(&f, &bounds, &cfg).expect("bisection"),
            false_position(&f, &bounds, &cfg).expect("false position"),
            newton_raphson(&f, 0.5, &cfg).expect("newton"),
            modified_secant(&f, 0.5, &cfg).expect("secant"),
        ]
    };
    let first = runs();
    let second = runs();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_exhaustion_policy_unifies_methods() {
    let in_f = |x: f64| x * x - 4.0;
    let in_df = |x: f64| 2.0 * x;
    let f = RealFnAndFirst::new(&in_f, &in_df);
    let bounds = Bounds::new(0.0, 3.0);

    let strict = SolverConfig::new(1e-14, 2).with_exhaustion(ExhaustionPolicy::RaiseOnExhaustion);
    assert!(matches!(bisection(&f, &bounds, &strict), Err(RootError::NonConvergence { .. })));
    assert!(matches!(false_position(&f, &bounds, &strict), Err(RootError::NonConvergence { .. })));
    assert!(matches!(newton_raphson(&f, 1.0, &strict), Err(RootError::NonConvergence { .. })));
    assert!(matches!(modified_secant(&f, 1.0, &strict), Err(RootError::NonConvergence { .. })));

    let lenient = strict.with_exhaustion(ExhaustionPolicy::ReturnBestEffort);
    assert!(bisection(&f, &bounds, &lenient).is_ok());
    assert!(false_position(&f, &bounds, &lenient).is_ok());
    assert!(newton_raphson(&f, 1.0, &lenient).is_ok());
    assert!(modified_secant(&f, 1.0, &lenient).is_ok());
}

#[test]
fn test_error_messages() {
    let in_f = |x: f64| x * x - 4.0;
    let f = RealFn::new(&in_f);

    let err = bisection(&f, &Bounds::new(1.0, 1.0), &SolverConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "no sign change on [1, 1]: f(a)=-3, f(b)=-3");

    let err = modified_secant(&f, 0.0, &SolverConfig::default()).unwrap_err();
    assert!(err.to_string().contains("x=0"));

    let err = newton_raphson(
        &RealFnAndFirst::new(&in_f, &|x: f64| 2.0 * x),
        1.0,
        &SolverConfig::default().with_max_iter(0),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "no convergence after 0 iterations, last x=1");

    let cfg = SolverConfig::default().with_tol(-1.0);
    let err = bisection(&f, &Bounds::new(1.0, 3.0), &cfg).unwrap_err();
    assert_eq!(err.to_string(), "invalid tolerance: must be finite and > 0, got -1");
}

#[test]
fn test_linear_and_ode_recipes() {
    let a = vec![
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ];
    let x = gaussian_elimination(&a, &[8.0, -11.0, -3.0]).expect("solvable");
    for (got, want) in x.iter().zip([2.0, 3.0, -1.0].iter()) {
        assert_abs_diff_eq!(got, want, epsilon = 1e-12);
    }

    // y' = -2xy, y(0) = 1  =>  y = exp(-x^2)
    let f = |x: f64, y: f64| -2.0 * x * y;
    let traj = integrate(Method::RungeKutta4, &f, 0.0, 1.0, 0.01, 100).expect("integrated");
    let (x_end, y_end) = traj.last();
    assert_abs_diff_eq!(x_end, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y_end, (-1.0f64).exp(), epsilon = 1e-8);
}
