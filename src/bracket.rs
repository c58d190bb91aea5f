//! Brackets: closed intervals known to hold a sign change of f(x).

use crate::wrap::RealFnEval;

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Bounds {
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn middle(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }

    /// One bisection step with the evaluations already in hand.
    ///
    /// Given `f_a = f(a)` and `f_mid = f(mid)`, keeps the half of the window
    /// that still straddles a sign change and returns it together with f at
    /// its left end.
    pub fn split(&self, mid: f64, f_a: f64, f_mid: f64) -> (Bounds, f64) {
        debug_assert!(self.contains(mid));
        if is_sign_change(f_a, f_mid) {
            (Bounds { a: self.a, b: mid }, f_a)
        } else {
            (Bounds { a: mid, b: self.b }, f_mid)
        }
    }
}

/// Whether `lhs` and `rhs` have strictly opposite signs.
///
/// Equivalent to `lhs * rhs < 0` without forming the product, so underflow
/// cannot hide a sign change.  Zero (of either sign) never counts.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}

/// Scans interval [a,b] and emits the first bracket containing a sign change.
/// For a continuous function the Intermediate Value Theorem guarantees that the
/// bracket contains at least one root.  Without a continuity guarantee, it
/// might be a singularity instead.
///
/// A root sitting exactly on a window edge makes f vanish there, which is not
/// a strict sign change; shift the scan origin if that matters.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Bounds>
where
    F: RealFnEval,
{
    BracketGenerator::new(f, bounds.clone(), window_size).next()
}

/// Iterator over every window of a fixed-width scan that carries a sign change.
pub struct BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    end: f64,
    window_size: f64,
    win: Bounds,
    f_a: f64,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(f: &'a F, bounds: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        assert!(window_size > 0.0);

        let win = Bounds {
            a: bounds.a,
            b: (bounds.a + window_size).min(bounds.b),
        };
        let f_a = f.eval_f(win.a);
        BracketGenerator {
            f,
            end: bounds.b,
            window_size,
            win,
            f_a,
        }
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        while self.win.a < self.end {
            let f_b = self.f.eval_f(self.win.b);
            let hit = if is_sign_change(self.f_a, f_b) {
                Some(self.win.clone())
            } else {
                None
            };

            self.f_a = f_b;
            self.win.a = self.win.b;
            let next_b = (self.win.b + self.window_size).min(self.end);
            // window below the float spacing here: finish in one step
            self.win.b = if next_b > self.win.a { next_b } else { self.end };

            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}
