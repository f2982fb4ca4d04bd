//! Dense linear system solver for small normal-equation systems

use demand_spi::{DemandError, Result};

/// Pivots with smaller magnitude are treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Solve `A * x = b` by Gaussian elimination with partial pivoting.
///
/// At each column the row with the largest absolute entry is swapped into the
/// pivot position. If that pivot is below [`PIVOT_EPSILON`] the system is
/// reported as [`DemandError::SingularMatrix`]; callers are expected to fall
/// back rather than fail.
///
/// # Errors
///
/// * [`DemandError::InvalidData`] if `A` is not square, does not match `b`,
///   or contains non-finite values
/// * [`DemandError::SingularMatrix`] if elimination cannot proceed
///
/// # Example
///
/// ```rust
/// use demand_core::regression::solve_linear_system;
///
/// let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
/// let x = solve_linear_system(&a, &[3.0, 5.0]).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-10);
/// assert!((x[1] - 1.4).abs() < 1e-10);
/// ```
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    let n = a.len();
    if b.len() != n {
        return Err(DemandError::InvalidData(format!(
            "matrix has {} rows, right-hand side has {}",
            n,
            b.len()
        )));
    }
    if let Some((i, row)) = a.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(DemandError::InvalidData(format!(
            "matrix is not square: row {} has {} columns, expected {}",
            i,
            row.len(),
            n
        )));
    }
    if a.iter().flatten().chain(b).any(|v| !v.is_finite()) {
        return Err(DemandError::InvalidData(
            "linear system contains non-finite values".to_string(),
        ));
    }

    // Augmented matrix [A | b]
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut r = row.clone();
            r.push(rhs);
            r
        })
        .collect();

    for col in 0..n {
        // Find pivot
        let mut max_row = col;
        for row in (col + 1)..n {
            if m[row][col].abs() > m[max_row][col].abs() {
                max_row = row;
            }
        }
        m.swap(col, max_row);

        let pivot = m[col][col];
        if pivot.abs() < PIVOT_EPSILON {
            return Err(DemandError::SingularMatrix { column: col, pivot });
        }

        // Eliminate below
        for row in (col + 1)..n {
            let factor = m[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..=n {
                m[row][j] -= factor * m[col][j];
            }
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|j| m[i][j] * x[j]).sum();
        x[i] = (m[i][n] - tail) / m[i][i];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_3x3() {
        // x = 2, y = 3, z = -1
        let a = vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ];
        let b = [8.0, -11.0, -3.0];
        let x = solve_linear_system(&a, &b).unwrap();

        assert!((x[0] - 2.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
        assert!((x[2] + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_requires_row_swap() {
        // Zero in the leading position forces a pivot swap
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let x = solve_linear_system(&a, &[4.0, 7.0]).unwrap();
        assert!((x[0] - 7.0).abs() < 1e-10);
        assert!((x[1] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_identical_rows_are_singular() {
        let a = vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
        ];
        let result = solve_linear_system(&a, &[1.0, 1.0, 2.0]);
        assert!(matches!(result, Err(DemandError::SingularMatrix { .. })));
    }

    #[test]
    fn test_zero_matrix_singular_at_first_column() {
        let a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        match solve_linear_system(&a, &[0.0, 0.0]) {
            Err(DemandError::SingularMatrix { column, .. }) => assert_eq!(column, 0),
            other => panic!("Expected SingularMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_tiny_pivot_is_singular() {
        let a = vec![vec![1e-12, 0.0], vec![0.0, 1e-12]];
        assert!(solve_linear_system(&a, &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_non_square_rejected() {
        let a = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            solve_linear_system(&a, &[1.0, 2.0]),
            Err(DemandError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rhs_length_mismatch_rejected() {
        let a = vec![vec![1.0]];
        assert!(solve_linear_system(&a, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let a = vec![vec![f64::NAN]];
        assert!(matches!(
            solve_linear_system(&a, &[1.0]),
            Err(DemandError::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_system() {
        let x = solve_linear_system(&[], &[]).unwrap();
        assert!(x.is_empty());
    }
}
