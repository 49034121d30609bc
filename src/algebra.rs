//! Free-function linear algebra routines over square matrices.
//!
//! These are the building blocks behind [`Matrix::determinant`],
//! [`Matrix::inverse`] and [`Matrix::rotate_about`]. They are exposed
//! directly so callers can reuse work buffers or build rotations into an
//! existing matrix without going through the method wrappers.

use crate::{layout::Layout, Matrix, Number, Sqrt, Trig, Vector};

fn swap_rows<T, const N: usize, L: Layout>(m: &mut Matrix<T, N, N, L>, a: usize, b: usize) {
    let slice = m.as_mut_slice();
    for col in 0..N {
        slice.swap(L::offset::<N, N>(a, col), L::offset::<N, N>(b, col));
    }
}

/// Computes the determinant of a square matrix.
///
/// Uses the [Bareiss algorithm], a fraction-free variant of Gaussian
/// elimination: every intermediate division is exact, so the result is exact
/// for integer element types (no rounding toward zero along the way). For a
/// 0x0 matrix the determinant is 1, the empty product.
///
/// [Bareiss algorithm]: https://en.wikipedia.org/wiki/Bareiss_algorithm
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let mat = Mat2::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// assert_eq!(algebra::determinant(&mat), -2);
/// assert_eq!(algebra::determinant(&Mat4i::identity()), 1);
/// ```
pub fn determinant<T, const N: usize, L>(m: &Matrix<T, N, N, L>) -> T
where
    T: Number,
    L: Layout,
{
    if N == 0 {
        return T::ONE;
    }

    let mut w = m.clone();
    let mut sign = T::ONE;
    let mut prev = T::ONE;
    for k in 0..N - 1 {
        if w[(k, k)] == T::ZERO {
            // A zero pivot requires a row exchange, which flips the sign. If
            // the whole column below is zero, the matrix is singular.
            match (k + 1..N).find(|&row| w[(row, k)] != T::ZERO) {
                Some(row) => {
                    swap_rows(&mut w, k, row);
                    sign = -sign;
                }
                None => return T::ZERO,
            }
        }

        for i in k + 1..N {
            for j in k + 1..N {
                // The division by the previous pivot is always exact.
                w[(i, j)] = (w[(i, j)] * w[(k, k)] - w[(i, k)] * w[(k, j)]) / prev;
            }
        }
        prev = w[(k, k)];
    }

    w[(N - 1, N - 1)] * sign
}

/// Computes the inverse of `src`, storing it in `dst`.
///
/// Returns `false` if `src` is singular (a pivot column is exactly zero); the
/// contents of `dst` are unspecified in that case. `dst` is fully overwritten
/// on success, so its previous contents do not matter.
///
/// Uses Gauss-Jordan elimination. This performs per-element divisions, so it
/// is only meaningful for element types where division is exact enough,
/// typically floats.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let mat = Mat2::from_rows([
///     [4.0, 7.0],
///     [2.0, 6.0],
/// ]);
/// let mut inv = Mat2d::zero();
/// assert!(algebra::invert(&mut inv, &mat));
/// assert_approx_eq!(mat * inv, Mat2d::identity());
/// ```
pub fn invert<T, const N: usize, L>(dst: &mut Matrix<T, N, N, L>, src: &Matrix<T, N, N, L>) -> bool
where
    T: Number,
    L: Layout,
{
    let mut work = src.clone();
    dst.set_identity();

    for k in 0..N {
        let pivot_row = match (k..N).find(|&row| work[(row, k)] != T::ZERO) {
            Some(row) => row,
            None => return false,
        };
        if pivot_row != k {
            swap_rows(&mut work, k, pivot_row);
            swap_rows(dst, k, pivot_row);
        }

        let pivot = work[(k, k)];
        for col in 0..N {
            work[(k, col)] = work[(k, col)] / pivot;
            dst[(k, col)] = dst[(k, col)] / pivot;
        }

        for row in 0..N {
            if row == k {
                continue;
            }
            let factor = work[(row, k)];
            if factor == T::ZERO {
                continue;
            }
            for col in 0..N {
                work[(row, col)] = work[(row, col)] - factor * work[(k, col)];
                dst[(row, col)] = dst[(row, col)] - factor * dst[(k, col)];
            }
        }
    }

    true
}

/// Writes a rotation of `radians` around `axis` into the upper-left 3x3 block
/// of `mat`.
///
/// Uses the [Rodrigues rotation formula]. `axis` is normalized internally, so
/// any non-zero vector works. Elements outside the 3x3 block are left
/// untouched, which lets this fill the rotation part of a larger (eg.
/// homogeneous 4x4) transform; seed `mat` with the identity to get a pure
/// rotation.
///
/// [Rodrigues rotation formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
///
/// # Panics
///
/// Panics if `N < 3`.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// use std::f32::consts::TAU;
///
/// let mut mat = Mat4f::identity();
/// algebra::rotation_about_axis(&mut mat, vec3(0.0, 0.0, 1.0), TAU / 4.0);
/// assert_approx_eq!(mat * Vec4f::X, Vec4f::Y);
/// assert_approx_eq!(mat * Vec4f::W, Vec4f::W);
/// ```
pub fn rotation_about_axis<T, const N: usize, L>(
    mat: &mut Matrix<T, N, N, L>,
    axis: Vector<T, 3>,
    radians: T,
) where
    T: Number + Trig + Sqrt,
    L: Layout,
{
    assert!(
        N >= 3,
        "rotation about an axis requires at least a 3x3 matrix, got {}x{}",
        N,
        N,
    );

    let [x, y, z] = axis.normalize().into_array();
    let s = radians.sin();
    let c = radians.cos();
    let t = T::ONE - c;

    mat[(0, 0)] = t * x * x + c;
    mat[(0, 1)] = t * x * y - s * z;
    mat[(0, 2)] = t * x * z + s * y;
    mat[(1, 0)] = t * x * y + s * z;
    mat[(1, 1)] = t * y * y + c;
    mat[(1, 2)] = t * y * z - s * x;
    mat[(2, 0)] = t * x * z - s * y;
    mat[(2, 1)] = t * y * z + s * x;
    mat[(2, 2)] = t * z * z + c;
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{
        assert_approx_eq,
        layout::{ColumnMajor, RowMajor},
        vec3, Mat2, Mat2d, Mat2f, Mat3, Mat3f, Mat4, Mat4f, Vec3f, Vec4f,
    };

    use super::*;

    #[test]
    fn determinant_identity() {
        fn check<const N: usize>() {
            let identity = Matrix::<i64, N, N>::identity();
            assert_eq!(determinant(&identity), 1);
        }

        check::<1>();
        check::<2>();
        check::<3>();
        check::<4>();
        check::<5>();
    }

    #[test]
    fn determinant_int_exact() {
        let mat = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(determinant(&mat), -2);

        // Would produce a wrong result if any intermediate division truncated.
        let mat = Mat3::from_rows([[3, 1, 4], [1, 5, 9], [2, 6, 5]]);
        assert_eq!(determinant(&mat), -90);

        #[rustfmt::skip]
        let mat = Mat4::from_rows([
            [2, 0, 1, 3],
            [1, 4, 0, 2],
            [0, 1, 3, 1],
            [5, 2, 1, 0],
        ]);
        assert_eq!(determinant(&mat), -185);
    }

    #[test]
    fn determinant_pivot_swap() {
        // Leading zero forces a row exchange (and a sign flip).
        let mat = Mat2::from_rows([[0, 1], [1, 0]]);
        assert_eq!(determinant(&mat), -1);

        let mat = Mat3::from_rows([[0, 0, 1], [0, 1, 0], [1, 0, 0]]);
        assert_eq!(determinant(&mat), -1);
    }

    #[test]
    fn determinant_singular() {
        let mat = Mat2::from_rows([[1, 2], [2, 4]]);
        assert_eq!(determinant(&mat), 0);

        let mat = Mat2::from_rows([[0, 0], [3, 7]]);
        assert_eq!(determinant(&mat), 0);
    }

    #[test]
    fn determinant_layout_invariant() {
        let cm = Matrix::<_, 3, 3, ColumnMajor>::from_rows([[3, 1, 4], [1, 5, 9], [2, 6, 5]]);
        let rm = cm.with_layout::<RowMajor>();
        assert_eq!(determinant(&cm), determinant(&rm));
    }

    #[test]
    fn determinant_scales_with_product() {
        let a = Mat2::from_rows([[2.0, 1.0], [1.0, 3.0]]);
        let b = Mat2::from_rows([[0.5, -1.0], [2.0, 1.5]]);
        assert_approx_eq!(
            determinant(&(a * b)),
            determinant(&a) * determinant(&b),
            1e-6
        );
    }

    #[test]
    fn invert_roundtrip() {
        let mat = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(mat * inv, Mat2d::identity());
        assert_approx_eq!(inv * mat, Mat2d::identity());

        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [1.0f32, 2.0, 0.0],
            [0.0,    1.0, 3.0],
            [4.0,    0.0, 1.0],
        ]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(mat * inv, Mat3f::identity(), 1e-5);
    }

    #[test]
    fn invert_needs_pivot_swap() {
        let mat = Mat2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(mat * inv, Mat2d::identity());
    }

    #[test]
    fn invert_singular() {
        let singular = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.inverse(), None);

        let mut zero_row = Mat2::from_rows([[1.0, 2.0], [0.0, 0.0]]);
        assert!(!zero_row.invert_in_place());

        assert_eq!(Mat3f::zero().inverse(), None);
    }

    #[test]
    fn invert_in_place() {
        let mat = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let mut inv = mat;
        assert!(inv.invert_in_place());
        assert_approx_eq!(mat * inv, Mat2d::identity());
    }

    #[test]
    fn rotation_quarter_turn() {
        let mut mat = Mat3f::identity();
        rotation_about_axis(&mut mat, vec3(0.0, 0.0, 1.0), TAU / 4.0);
        assert_approx_eq!(mat * Vec3f::X, Vec3f::Y);
        assert_approx_eq!(mat * Vec3f::Y, -Vec3f::X);
        assert_approx_eq!(mat * Vec3f::Z, Vec3f::Z);
    }

    #[test]
    fn rotation_axis_is_normalized() {
        let mut scaled = Mat3f::identity();
        rotation_about_axis(&mut scaled, vec3(0.0, 0.0, 10.0), TAU / 8.0);
        let mut unit = Mat3f::identity();
        rotation_about_axis(&mut unit, vec3(0.0, 0.0, 1.0), TAU / 8.0);
        assert_approx_eq!(scaled, unit);
    }

    #[test]
    fn rotation_preserves_outer_block() {
        let mut mat = Mat4f::identity() * 2.0;
        rotation_about_axis(&mut mat, vec3(1.0, 0.0, 0.0), TAU / 2.0);
        // Row/column 3 still holds the scaled identity.
        assert_eq!(mat[(3, 3)], 2.0);
        assert_eq!(mat[(0, 3)], 0.0);
        assert_eq!(mat[(3, 0)], 0.0);
        assert_approx_eq!(mat * Vec4f::W * 0.5, Vec4f::W);
    }

    #[test]
    fn rotation_inverse_is_transpose() {
        let mut mat = Mat3f::identity();
        rotation_about_axis(&mut mat, vec3(1.0, 2.0, 3.0), 1.1);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(inv, mat.transpose(), 1e-6);
    }

    #[test]
    #[should_panic(expected = "requires at least a 3x3 matrix")]
    fn rotation_too_small() {
        let mut mat = Mat2f::identity();
        rotation_about_axis(&mut mat, vec3(0.0, 0.0, 1.0), 1.0);
    }
}
