//! Naive Gaussian elimination for small dense systems.
//!
//! No pivoting, no factorization reuse.  The system is given as plain rows,
//! there is no matrix type.

use log::trace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearError {
    #[error("non-square system: {rows} rows, row {row} has {cols} columns, rhs has {rhs} entries")]
    DimensionMismatch {
        rows: usize,
        row: usize,
        cols: usize,
        rhs: usize,
    },

    #[error("zero pivot in row {row}; naive elimination cannot proceed without row exchanges")]
    ZeroPivot { row: usize },
}

/// Solves `A x = b` by forward elimination followed by back substitution.
///
/// `a` holds the rows of the square coefficient matrix.  Neither input is
/// modified; elimination works on an augmented copy.  Rows are never
/// exchanged, so a zero on the diagonal during elimination is an error even
/// if the system is solvable.
///
/// ```
/// use numrecipes::linear::gaussian_elimination;
///
/// let a = vec![
///     vec![2.0, 1.0, -1.0],
///     vec![-3.0, -1.0, 2.0],
///     vec![-2.0, 1.0, 2.0],
/// ];
/// let b = [8.0, -11.0, -3.0];
///
/// let x = gaussian_elimination(&a, &b).expect("solvable");
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((x[2] + 1.0).abs() < 1e-12);
/// ```
pub fn gaussian_elimination(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, LinearError> {
    let n = b.len();
    let mismatch = |row: usize, cols: usize| LinearError::DimensionMismatch {
        rows: a.len(),
        row,
        cols,
        rhs: n,
    };
    if n == 0 || a.len() != n {
        return Err(mismatch(0, a.first().map_or(0, Vec::len)));
    }
    if let Some((row, r)) = a.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(mismatch(row, r.len()));
    }

    // augmented matrix [A | b]
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut aug = row.clone();
            aug.push(rhs);
            aug
        })
        .collect();

    // forward elimination
    for i in 0..n {
        let pivot = m[i][i];
        if pivot == 0.0 {
            return Err(LinearError::ZeroPivot { row: i });
        }
        for j in (i + 1)..n {
            let factor = m[j][i] / pivot;
            for k in i..=n {
                let delta = factor * m[i][k];
                m[j][k] -= delta;
            }
        }
        trace!("eliminated column {}", i);
    }

    // back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|k| m[i][k] * x[k]).sum();
        x[i] = (m[i][n] - tail) / m[i][i];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_by_three() {
        let a = vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ];
        let b = vec![8.0, -11.0, -3.0];
        let x = gaussian_elimination(&a, &b).expect("solvable");

        assert_abs_diff_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], -1.0, epsilon = 1e-12);

        // inputs untouched
        assert_eq!(a[0], vec![2.0, 1.0, -1.0]);
        assert_eq!(b, vec![8.0, -11.0, -3.0]);
    }

    #[test]
    fn test_one_by_one() {
        let x = gaussian_elimination(&[vec![4.0]], &[2.0]).expect("solvable");
        assert_eq!(x, vec![0.5]);
    }

    #[test]
    fn test_upper_triangular_needs_no_elimination() {
        let a = vec![vec![1.0, 2.0], vec![0.0, 4.0]];
        let x = gaussian_elimination(&a, &[5.0, 8.0]).expect("solvable");
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_pivot_without_row_exchange() {
        // solvable with pivoting, but not naively
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        match gaussian_elimination(&a, &[1.0, 2.0]) {
            Err(LinearError::ZeroPivot { row }) => assert_eq!(row, 0),
            other => panic!("expected zero pivot, got {:?}", other),
        }
    }

    #[test]
    fn test_singular_system() {
        let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        match gaussian_elimination(&a, &[1.0, 2.0]) {
            Err(LinearError::ZeroPivot { row }) => assert_eq!(row, 1),
            other => panic!("expected zero pivot, got {:?}", other),
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let empty: Vec<Vec<f64>> = vec![];
        assert!(matches!(
            gaussian_elimination(&empty, &[]),
            Err(LinearError::DimensionMismatch { .. })
        ));

        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(matches!(
            gaussian_elimination(&a, &[1.0, 2.0, 3.0]),
            Err(LinearError::DimensionMismatch { rows: 2, rhs: 3, .. })
        ));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            gaussian_elimination(&ragged, &[1.0, 2.0]),
            Err(LinearError::DimensionMismatch { row: 1, cols: 1, .. })
        ));
    }
}
