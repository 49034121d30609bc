//! Operator impls for [`Matrix`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, layout::Layout, Matrix, Vector, Zero};

/// Indexes the matrix by logical `(row, column)` position, independently of
/// the storage layout.
impl<T, const R: usize, const C: usize, L: Layout> Index<(usize, usize)> for Matrix<T, R, C, L> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match L::get(&self.0, row, col) {
            Some(elem) => elem,
            None => panic!(
                "position ({}, {}) is out of bounds of {}x{} matrix",
                row, col, R, C,
            ),
        }
    }
}

impl<T, const R: usize, const C: usize, L: Layout> IndexMut<(usize, usize)> for Matrix<T, R, C, L> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match L::get_mut(&mut self.0, row, col) {
            Some(elem) => elem,
            None => panic!(
                "position ({}, {}) is out of bounds of {}x{} matrix",
                row, col, R, C,
            ),
        }
    }
}

/// Indexes the backing storage by *physical* slot, in the element order of
/// [`Matrix::as_slice`].
impl<T, const R: usize, const C: usize, L: Layout> Index<usize> for Matrix<T, R, C, L> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, const R: usize, const C: usize, L: Layout> IndexMut<usize> for Matrix<T, R, C, L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Compares element-wise by logical position, so matrices with different
/// storage layouts can compare equal.
impl<T, U, const R: usize, const C: usize, L1, L2> PartialEq<Matrix<U, R, C, L2>>
    for Matrix<T, R, C, L1>
where
    T: PartialEq<U>,
    L1: Layout,
    L2: Layout,
{
    fn eq(&self, other: &Matrix<U, R, C, L2>) -> bool {
        (0..R).all(|row| (0..C).all(|col| self[(row, col)] == other[(row, col)]))
    }
}

impl<T: Eq, const R: usize, const C: usize, L: Layout> Eq for Matrix<T, R, C, L> {}

impl<T, U, const R: usize, const C: usize, L1, L2> ApproxEq<Matrix<U, R, C, L2>>
    for Matrix<T, R, C, L1>
where
    T: ApproxEq<U>,
    L1: Layout,
    L2: Layout,
{
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &Matrix<U, R, C, L2>, tolerance: Self::Tolerance) -> bool {
        (0..R).all(|row| {
            (0..C).all(|col| self[(row, col)].approx_eq(&other[(row, col)], tolerance))
        })
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize, L: Layout> Neg for Matrix<T, R, C, L>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|elem| -elem)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize, L: Layout> Add for Matrix<T, R, C, L>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize, L: Layout> AddAssign for Matrix<T, R, C, L>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        for row in 0..R {
            for col in 0..C {
                self[(row, col)] += rhs[(row, col)];
            }
        }
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize, L: Layout> Sub for Matrix<T, R, C, L>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize, L: Layout> SubAssign for Matrix<T, R, C, L>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        for row in 0..R {
            for col in 0..C {
                self[(row, col)] -= rhs[(row, col)];
            }
        }
    }
}

/// Matrix * column vector multiplication.
impl<T, const R: usize, const C: usize, L: Layout> Mul<Vector<T, C>> for Matrix<T, R, C, L>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|row| {
            (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col])
        })
    }
}

/// Matrix * matrix multiplication. The operand shapes must be compatible,
/// which is enforced at compile time.
impl<T, const R: usize, const N: usize, const C: usize, L> Mul<Matrix<T, N, C, L>>
    for Matrix<T, R, N, L>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
    L: Layout,
{
    type Output = Matrix<T, R, C, L>;

    fn mul(self, rhs: Matrix<T, N, C, L>) -> Matrix<T, R, C, L> {
        Matrix::from_fn(|row, col| {
            (0..N).fold(T::ZERO, |acc, i| acc + self[(row, i)] * rhs[(i, col)])
        })
    }
}

/// Composes `rhs` onto `self` from the right: `*self = *self * rhs`.
///
/// When the result is applied to a column vector, `rhs` takes effect *before*
/// the transform previously stored in `self`.
///
/// This accepts any `R` x `C` left-hand side, not just square matrices: a
/// square `rhs` preserves the shape of `self`, so the assignment is always
/// well-formed. For square `self` it is exactly `*self = *self * rhs`.
impl<T, const R: usize, const C: usize, L> MulAssign<Matrix<T, C, C, L>> for Matrix<T, R, C, L>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
    L: Layout,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C, L>) {
        *self = self.clone() * rhs;
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<T, const R: usize, const C: usize, L: Layout> Mul<T> for Matrix<T, R, C, L>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<T, const R: usize, const C: usize, L: Layout> MulAssign<T> for Matrix<T, R, C, L>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            *elem *= rhs;
        }
    }
}

/// Matrix-Scalar division (scaling).
impl<T, const R: usize, const C: usize, L: Layout> Div<T> for Matrix<T, R, C, L>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

/// Matrix-Scalar division (scaling).
impl<T, const R: usize, const C: usize, L: Layout> DivAssign<T> for Matrix<T, R, C, L>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            *elem /= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::{ColumnMajor, RowMajor};
    use crate::{vec2, Mat2, Mat2u, Mat2ub, Mat2x3, Mat3};

    use super::*;

    #[test]
    fn cross_layout_eq() {
        let cm = Matrix::<_, 2, 3, ColumnMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let rm = cm.with_layout::<RowMajor>();
        assert_eq!(cm, rm);
        assert_eq!(rm, cm);
        assert_ne!(rm, Matrix::<_, 2, 3, ColumnMajor>::zero());
    }

    #[test]
    fn physical_index() {
        let mat = Matrix::<_, 2, 2, RowMajor>::from_rows([[1, 2], [3, 4]]);
        assert_eq!((mat[0], mat[1], mat[2], mat[3]), (1, 2, 3, 4));

        let mat = mat.with_layout::<ColumnMajor>();
        assert_eq!((mat[0], mat[1], mat[2], mat[3]), (1, 3, 2, 4));
    }

    #[test]
    #[should_panic(expected = "position (0, 2) is out of bounds of 2x2 matrix")]
    fn logical_index_out_of_bounds() {
        let mat = Mat2::<i32>::zero();
        let _ = mat[(0, 2)];
    }

    #[test]
    fn mat_vec_mul_layout_invariant() {
        let cm = Matrix::<_, 2, 2, ColumnMajor>::from_rows([[1, 2], [3, 4]]);
        let rm = cm.with_layout::<RowMajor>();
        let v = vec2(5, 6);
        assert_eq!(cm * v, rm * v);
    }

    #[test]
    fn unsigned_elements() {
        let a = Mat2u::from_rows([[1, 2], [3, 4]]);
        let b = Mat2u::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2u::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2u::from_rows([[9, 18], [27, 36]]));
        assert_eq!(a * 2, Mat2u::from_rows([[2, 4], [6, 8]]));
        assert_eq!(b / 10, a);
        assert_eq!(a * vec2(5u32, 6), vec2(17, 39));
        assert_eq!(a * Mat2u::identity(), a);

        let mut acc = a;
        acc += b;
        acc -= a;
        acc *= 3;
        acc /= 3;
        assert_eq!(acc, b);

        let bytes = Mat2ub::from_rows([[1, 2], [3, 4]]);
        assert_eq!(bytes + bytes, bytes * 2);
    }

    #[test]
    fn mul_assign_rectangular() {
        let mut mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let rhs = Mat3::<i32>::identity() * 2;
        mat *= rhs;
        assert_eq!(mat, Mat2x3::from_rows([[2, 4, 6], [8, 10, 12]]));
    }

    #[test]
    fn scalar_div() {
        let mat = Mat2::from_rows([[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(mat / 2.0, Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));

        let mut mat = mat;
        mat /= 2.0;
        assert_eq!(mat, Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }
}
