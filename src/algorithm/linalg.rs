//! Dense linear algebra kernels (f64)
//!
//! LU factorization with partial pivoting and the explicit matrix inverse
//! built on it. The solver deliberately inverts and multiplies instead of
//! running a decomposition-based direct solve; see the crate docs for the
//! numerical consequences.
//!
//! All kernels take row-major slices with an explicit order `n` and never
//! allocate beyond their outputs.

use crate::error::{Error, Result};

/// Absolute pivot threshold below which elimination reports a singular
/// matrix.
///
/// Exactly dependent rows cancel to 0.0 during elimination and are caught;
/// merely ill-conditioned systems pass the threshold and surface as loss of
/// accuracy instead.
pub const DEFAULT_PIVOT_EPS: f64 = f64::EPSILON;

/// LU factorization with partial pivoting, in place: PA = LU
///
/// ```text
/// For k = 0 to n-1:
///   pivot_row = argmax(|A[k:n, k]|) + k
///   if |A[pivot_row, k]| < eps: singular
///   swap rows k and pivot_row (and perm entries)
///   A[i, k] = A[i, k] / A[k, k]            for i > k   (L column)
///   A[i, j] -= A[i, k] * A[k, j]           for i, j > k
/// ```
///
/// On success `a` holds both factors (L strictly below the diagonal with an
/// implied unit diagonal, U on and above it) and `perm[i]` names the original
/// row now sitting at position i. Returns the number of row swaps performed,
/// which fixes the determinant sign.
///
/// # Errors
///
/// Returns [`Error::Singular`] if the largest available pivot in some column
/// has magnitude below `eps`.
pub fn lu_factor(a: &mut [f64], perm: &mut [usize], n: usize, eps: f64) -> Result<usize> {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(perm.len(), n);

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut swaps = 0;
    for k in 0..n {
        // Find pivot
        let mut max_val = a[k * n + k].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a[i * n + k].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val < eps {
            return Err(Error::Singular { column: k });
        }

        // Swap rows
        if max_row != k {
            perm.swap(k, max_row);
            for j in 0..n {
                a.swap(k * n + j, max_row * n + j);
            }
            swaps += 1;
        }

        // Elimination
        let pivot = a[k * n + k];
        for i in (k + 1)..n {
            let factor = a[i * n + k] / pivot;
            a[i * n + k] = factor;
            for j in (k + 1)..n {
                a[i * n + j] -= factor * a[k * n + j];
            }
        }
    }

    Ok(swaps)
}

/// Explicit matrix inverse via LU factorization with partial pivoting.
///
/// Factors once, then solves `LU·x = P·e_col` for each identity column by
/// forward and back substitution.
///
/// # Errors
///
/// Returns [`Error::Singular`] if the matrix has no inverse.
pub fn invert(a: &[f64], n: usize, eps: f64) -> Result<Vec<f64>> {
    debug_assert_eq!(a.len(), n * n);

    let mut lu = a.to_vec();
    let mut perm = vec![0usize; n];
    lu_factor(&mut lu, &mut perm, n, eps)?;

    let mut inv = vec![0.0; n * n];

    for col in 0..n {
        // Forward substitution (Ly = Pb, unit diagonal), with b the identity
        // column: (Pb)[i] = 1 exactly when perm[i] == col
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut sum = if perm[i] == col { 1.0 } else { 0.0 };
            for j in 0..i {
                sum -= lu[i * n + j] * y[j];
            }
            y[i] = sum;
        }

        // Back substitution (Ux = y)
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in (i + 1)..n {
                sum -= lu[i * n + j] * x[j];
            }
            x[i] = sum / lu[i * n + i];
        }

        for i in 0..n {
            inv[i * n + col] = x[i];
        }
    }

    Ok(inv)
}

/// Matrix determinant from the LU factorization.
///
/// A matrix that fails to factor is exactly singular and reports 0.0.
pub fn det(a: &[f64], n: usize, eps: f64) -> f64 {
    debug_assert_eq!(a.len(), n * n);

    let mut lu = a.to_vec();
    let mut perm = vec![0usize; n];
    match lu_factor(&mut lu, &mut perm, n, eps) {
        Ok(swaps) => {
            let mut d = if swaps % 2 == 0 { 1.0 } else { -1.0 };
            for i in 0..n {
                d *= lu[i * n + i];
            }
            d
        }
        Err(_) => 0.0,
    }
}

/// Dense matrix product, row-major: `[m, k] @ [k, n] -> [m, n]`
pub fn matmul(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);

    let mut c = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a[i * k + l] * b[l * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    c
}

/// Dense matrix-vector product, row-major: `[m, n] @ [n] -> [m]`
pub fn matvec(a: &[f64], x: &[f64], m: usize, n: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), m * n);
    debug_assert_eq!(x.len(), n);

    let mut y = vec![0.0; m];
    for i in 0..m {
        let mut sum = 0.0;
        for j in 0..n {
            sum += a[i * n + j] * x[j];
        }
        y[i] = sum;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() <= tol, "{x} vs {y}");
        }
    }

    #[test]
    fn lu_factor_2x2_pivots() {
        // A = [[4, 3], [6, 3]]: partial pivoting must bring row 1 up
        let mut a = vec![4.0, 3.0, 6.0, 3.0];
        let mut perm = vec![0; 2];
        let swaps = lu_factor(&mut a, &mut perm, 2, DEFAULT_PIVOT_EPS).unwrap();
        assert_eq!(swaps, 1);
        assert_eq!(perm, vec![1, 0]);
        // U = [[6, 3], [0, 1]], L21 = 4/6
        assert_close(&a, &[6.0, 3.0, 4.0 / 6.0, 1.0], 1e-12);
    }

    #[test]
    fn invert_2x2() {
        // inv([[1, 1], [1, -1]]) = [[0.5, 0.5], [0.5, -0.5]]
        let a = vec![1.0, 1.0, 1.0, -1.0];
        let inv = invert(&a, 2, DEFAULT_PIVOT_EPS).unwrap();
        assert_close(&inv, &[0.5, 0.5, 0.5, -0.5], 1e-12);
    }

    #[test]
    fn invert_times_original_is_identity() {
        let a = vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0];
        let inv = invert(&a, 3, DEFAULT_PIVOT_EPS).unwrap();
        let product = matmul(&inv, &a, 3, 3, 3);
        let identity = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        assert_close(&product, &identity, 1e-12);
    }

    #[test]
    fn invert_needing_compound_permutation() {
        // Pivoting here composes swaps into a 3-cycle, so the permutation is
        // not its own inverse; the permuted identity columns must still land
        // in the right rows.
        let a = vec![0.0, 1.0, 2.0, 1.0, 0.0, 0.0, 0.0, 3.0, 1.0];
        let inv = invert(&a, 3, DEFAULT_PIVOT_EPS).unwrap();
        let product = matmul(&a, &inv, 3, 3, 3);
        let identity = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        assert_close(&product, &identity, 1e-12);
    }

    #[test]
    fn dependent_rows_are_singular() {
        let a = vec![1.0, 1.0, 2.0, 2.0];
        let err = invert(&a, 2, DEFAULT_PIVOT_EPS).unwrap_err();
        assert!(matches!(err, Error::Singular { column: 1 }));
    }

    #[test]
    fn det_tracks_swap_sign() {
        // det([[0, 1], [1, 0]]) = -1 requires one swap
        assert!((det(&[0.0, 1.0, 1.0, 0.0], 2, DEFAULT_PIVOT_EPS) + 1.0).abs() < 1e-12);
        assert!((det(&[2.0, 0.0, 0.0, 3.0], 2, DEFAULT_PIVOT_EPS) - 6.0).abs() < 1e-12);
        assert_eq!(det(&[1.0, 1.0, 2.0, 2.0], 2, DEFAULT_PIVOT_EPS), 0.0);
    }

    #[test]
    fn matvec_matches_hand_computation() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = matvec(&a, &[1.0, 0.5, -1.0], 2, 3);
        assert_close(&y, &[-1.0, 0.5], 1e-12);
    }
}
