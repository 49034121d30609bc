use std::{
    array, fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
    ptr,
};

use crate::{
    algebra,
    layout::{ColumnMajor, Layout},
    Cast, Number, One, Real, Sqrt, Trig, Vector, Zero,
};

mod ops;

macro_rules! mat_aliases {
    ($($name:ident : $R:literal x $C:literal [$($alias:ident = $ty:ty),* $(,)?];)*) => {
        $(
            #[doc = concat!(
                "A ", stringify!($R), "x", stringify!($C),
                " matrix with the default (column-major) storage layout.",
            )]
            pub type $name<T> = Matrix<T, $R, $C>;
            $(
                #[doc = concat!(
                    "A ", stringify!($R), "x", stringify!($C),
                    " matrix with [`", stringify!($ty), "`] elements.",
                )]
                pub type $alias = $name<$ty>;
            )*
        )*
    };
}

mat_aliases! {
    Mat2: 2 x 2 [Mat2f = f32, Mat2d = f64, Mat2i = i32, Mat2u = u32, Mat2b = i8, Mat2ub = u8, Mat2r = Real];
    Mat3: 3 x 3 [Mat3f = f32, Mat3d = f64, Mat3i = i32, Mat3u = u32, Mat3b = i8, Mat3ub = u8, Mat3r = Real];
    Mat4: 4 x 4 [Mat4f = f32, Mat4d = f64, Mat4i = i32, Mat4u = u32, Mat4b = i8, Mat4ub = u8, Mat4r = Real];
    Mat2x3: 2 x 3 [];
    Mat2x4: 2 x 4 [];
    Mat3x2: 3 x 2 [];
    Mat3x4: 3 x 4 [Mat3x4f = f32, Mat3x4d = f64, Mat3x4i = i32, Mat3x4u = u32, Mat3x4b = i8, Mat3x4ub = u8, Mat3x4r = Real];
    Mat4x2: 4 x 2 [];
    Mat4x3: 4 x 3 [Mat4x3f = f32, Mat4x3d = f64, Mat4x3i = i32, Mat4x3u = u32, Mat4x3b = i8, Mat4x3ub = u8, Mat4x3r = Real];
}

/// A matrix with `R` rows and `C` columns, element type `T`, and physical
/// storage layout `L`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from an
///   array of row or column vectors, checked for arity at compile time.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with
///   its row and column.
/// - [`Matrix::zero`] creates an all-zero matrix; for square matrices,
///   [`Matrix::identity`] and [`Matrix::from_diagonal`] are also available.
/// - [`Matrix::initializer`] fills an existing matrix from a stream of values
///   in logical row-major order.
/// - [`Matrix::uninit`] skips element initialization entirely, for callers
///   that overwrite every element before reading any.
///
/// Since the storage layout `L` does not take part in type inference, it has
/// to be mentioned (or defaulted) somewhere: use one of the type aliases
/// ([`Mat4`], [`Mat3x4f`], ...), a type annotation, or turbofish syntax.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y
/// coordinate), the second is the *column* (X coordinate), matching common
/// mathematical notation. Indices are 0-based. This logical address is
/// independent of the storage layout `L`; only the flat views ([`Index`] by
/// `usize`, [`Matrix::as_slice`], [`Matrix::as_ptr`]) expose physical order.
///
/// ```
/// # use linmat::*;
/// let mut mat = Matrix::<_, 1, 2>::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for
/// slices. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead
/// and can be used for checked indexing:
///
/// ```
/// # use linmat::*;
/// let mat = Matrix::<_, 1, 2>::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize, L: Layout = ColumnMajor>(L::Buf<T, R, C>);

#[rustfmt::skip]
unsafe impl<T, const R: usize, const C: usize, L> bytemuck::Zeroable for Matrix<T, R, C, L>
where
    T: bytemuck::Zeroable,
    L: Layout,
    L::Buf<T, R, C>: bytemuck::Zeroable,
{
}

#[rustfmt::skip]
unsafe impl<T, const R: usize, const C: usize, L> bytemuck::Pod for Matrix<T, R, C, L>
where
    T: bytemuck::Pod,
    L: Layout,
    L::Buf<T, R, C>: bytemuck::Pod,
{
}

impl<T: Clone, const R: usize, const C: usize, L: Layout> Clone for Matrix<T, R, C, L> {
    fn clone(&self) -> Self {
        Self::from_fn(|row, col| self[(row, col)].clone())
    }
}

impl<T: Copy, const R: usize, const C: usize, L: Layout> Copy for Matrix<T, R, C, L> where
    L::Buf<T, R, C>: Copy
{
}

impl<T, const R: usize, const C: usize, L: Layout> Matrix<T, R, C, L> {
    /// The number of rows, `R`.
    pub const ROWS: usize = R;
    /// The number of columns, `C`.
    pub const COLUMNS: usize = C;
    /// The total number of elements, `R * C`.
    pub const ELEMENTS: usize = R * C;

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// This takes exactly `R` rows of `C` elements each, so a complete set of
    /// elements is enforced at compile time. The values are interpreted the
    /// same way for every storage layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let rows = Mat2::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Mat2::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        let rows = ManuallyDrop::new(rows.map(|row| row.into().into_array()));
        // Safety: every element is read exactly once, and the original array
        // is never dropped.
        Self(L::from_fn(|row, col| unsafe { ptr::read(&rows[row][col]) }))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2x3::from_columns([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]);
    /// assert_eq!(mat, Mat2x3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        let columns = ManuallyDrop::new(columns.map(|col| col.into().into_array()));
        // Safety: every element is read exactly once, and the original array
        // is never dropped.
        Self(L::from_fn(|row, col| unsafe { ptr::read(&columns[col][row]) }))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2x3::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Mat2x3::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(L::from_fn(cb))
    }

    /// Creates an all-zero matrix.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::from_fn(|_, _| T::ZERO)
    }

    /// Creates a matrix without initializing its elements.
    ///
    /// This is an escape hatch for hot paths that overwrite every element
    /// before reading any. Convert back with [`Matrix::assume_init`] once
    /// every element has been written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// # use std::mem::MaybeUninit;
    /// let mut mat = Mat2::<u32>::uninit();
    /// for row in 0..2 {
    ///     for col in 0..2 {
    ///         mat[(row, col)] = MaybeUninit::new((row * 2 + col) as u32);
    ///     }
    /// }
    /// // Safety: the loop above wrote every element.
    /// let mat = unsafe { mat.assume_init() };
    /// assert_eq!(mat, Mat2::from_rows([[0, 1], [2, 3]]));
    /// ```
    pub fn uninit() -> Matrix<MaybeUninit<T>, R, C, L> {
        Matrix(L::from_fn(|_, _| MaybeUninit::uninit()))
    }

    /// Sets every element to zero.
    pub fn reset(&mut self)
    where
        T: Zero,
    {
        for elem in self.as_mut_slice() {
            *elem = T::ZERO;
        }
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2x3::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Mat2x3::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C, L>
    where
        F: FnMut(T) -> U,
    {
        let src = ManuallyDrop::new(self);
        // Safety: every element is read exactly once, and `src` is never
        // dropped.
        Matrix(L::from_fn(|row, col| f(unsafe { ptr::read(&src[(row, col)]) })))
    }

    /// Converts every element to the scalar type `U`, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::<_, 1, 2>::from_rows([[1.9f32, -0.5]]);
    /// assert_eq!(mat.cast::<i32>(), Matrix::<_, 1, 2>::from_rows([[1, 0]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C, L>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Swaps the rows and columns of this matrix, returning a new `C` x `R`
    /// matrix.
    ///
    /// The source is consumed, not mutated. For square matrices,
    /// [`Matrix::transpose_in_place`] avoids the extra value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2x3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]).transpose();
    /// assert_eq!(mat, Mat3x2::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R, L> {
        let src = ManuallyDrop::new(self);
        let mut out = Matrix::<T, C, R, L>::uninit();
        for row in 0..R {
            for col in 0..C {
                // Safety: every source element is read exactly once, and
                // `src` is never dropped.
                out[(col, row)] = MaybeUninit::new(unsafe { ptr::read(&src[(row, col)]) });
            }
        }
        // Safety: the loop above writes every element.
        unsafe { out.assume_init() }
    }

    /// Returns a matrix with the same elements but the storage layout `M`.
    ///
    /// Logically this is the identity: the result compares equal to the
    /// input. Only the physical element order (and thus [`Matrix::as_slice`])
    /// changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::<_, 2, 2, RowMajor>::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.as_slice(), &[1, 2, 3, 4]);
    ///
    /// let mat = mat.with_layout::<ColumnMajor>();
    /// assert_eq!(mat.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn with_layout<M: Layout>(self) -> Matrix<T, R, C, M> {
        let src = ManuallyDrop::new(self);
        // Safety: every element is read exactly once, and `src` is never
        // dropped.
        Matrix(M::from_fn(|row, col| unsafe { ptr::read(&src[(row, col)]) }))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2x3::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        L::get(&self.0, row, col)
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        L::get_mut(&mut self.0, row, col)
    }

    /// Views the backing storage as a flat slice of `R * C` elements.
    ///
    /// The element order is the *physical* order of the layout `L`: row by
    /// row for [`RowMajor`][crate::RowMajor], column by column for
    /// [`ColumnMajor`]. Consumers interpreting this view (eg. a graphics API
    /// upload) must agree on the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.as_slice(), &[1, 3, 2, 4]); // default layout is column-major
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        L::as_slice(&self.0)
    }

    /// Mutable variant of [`Matrix::as_slice`].
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        L::as_mut_slice(&mut self.0)
    }

    /// Returns a pointer to the first physical element of the backing
    /// storage.
    ///
    /// The pointee order is that of [`Matrix::as_slice`]. The pointer is
    /// valid for `R * C` reads while the matrix is alive and not moved.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Mutable variant of [`Matrix::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns a matrix with the contents of `self`, but a potentially
    /// different size.
    ///
    /// Elements not present in `self` will be initialized with
    /// [`T::ZERO`][Zero::ZERO].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Matrix::<_, 1, 3>::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Mat2::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2, L>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                mem::replace(&mut self[(row, col)], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Begins a sequential fill of this matrix in logical row-major order.
    ///
    /// Each [`push`][Initializer::push] writes the next logical slot,
    /// regardless of the physical storage layout. Pushing more than `R * C`
    /// values panics; call [`finish`][Initializer::finish] to assert that the
    /// matrix was filled completely. Dropping the initializer early leaves
    /// the remaining elements at their previous values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mut mat = Mat2::<i32>::zero();
    /// mat.initializer().push(1).push(2).push(3).push(4).finish();
    /// assert_eq!(mat, Mat2::from_rows([[1, 2], [3, 4]]));
    /// ```
    pub fn initializer(&mut self) -> Initializer<'_, T, R, C, L> {
        Initializer {
            matrix: self,
            cursor: 0,
        }
    }
}

impl<T, const R: usize, const C: usize, L: Layout> Matrix<MaybeUninit<T>, R, C, L> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// # Safety
    ///
    /// Every element must have been initialized; see
    /// [`MaybeUninit::assume_init`].
    pub unsafe fn assume_init(self) -> Matrix<T, R, C, L> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize, L: Layout> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C, L>>,
            init: ManuallyDrop<Matrix<T, R, C, L>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T, const N: usize, L: Layout> Matrix<T, N, N, L> {
    /// Creates the identity matrix, with 1 on the diagonal and 0 everywhere
    /// else.
    ///
    /// Multiplying any matrix or vector with the identity returns it
    /// unchanged.
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Overwrites `self` with the identity matrix.
    pub fn set_identity(&mut self)
    where
        T: Zero + One,
    {
        for row in 0..N {
            for col in 0..N {
                self[(row, col)] = if row == col { T::ONE } else { T::ZERO };
            }
        }
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to
    /// allow type inference of the created [`Matrix`]. To create a non-square
    /// matrix from its diagonal, use [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let diag = Mat3::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Mat3::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::zero();
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square
    /// matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mat = Mat2::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the
    /// diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let diag = Mat3::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }

    /// Transposes this square matrix in place.
    ///
    /// Each off-diagonal pair `(i, j)` / `(j, i)` is swapped exactly once; no
    /// full temporary copy is made. The result equals what
    /// [`Matrix::transpose`] would return.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// let mut mat = Mat2::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.transpose_in_place();
    /// assert_eq!(mat, Mat2::from_rows([
    ///     [1, 3],
    ///     [2, 4],
    /// ]));
    /// ```
    pub fn transpose_in_place(&mut self) {
        let slice = self.as_mut_slice();
        for i in 0..N {
            for j in (i + 1)..N {
                slice.swap(L::offset::<N, N>(i, j), L::offset::<N, N>(j, i));
            }
        }
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// Delegates to [`algebra::determinant`], which is exact for integer
    /// element types.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Mat3i::identity().determinant(), 1);
    /// assert_eq!(Mat2f::zero().determinant(), 0.0);
    /// ```
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        algebra::determinant(self)
    }

    /// Returns the inverse of this matrix, or [`None`] if it is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// assert_eq!(Mat2d::identity().inverse(), Some(Mat2d::identity()));
    ///
    /// let singular = Mat2d::from_rows([[1.0, 2.0], [0.0, 0.0]]);
    /// assert_eq!(singular.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self>
    where
        T: Number,
    {
        let mut out = Self::zero();
        algebra::invert(&mut out, self).then_some(out)
    }

    /// Inverts this matrix in place.
    ///
    /// Returns `false` if the matrix is singular; the contents of `self` are
    /// unspecified in that case and must not be trusted.
    pub fn invert_in_place(&mut self) -> bool
    where
        T: Number,
    {
        let src = self.clone();
        algebra::invert(self, &src)
    }

    /// Composes a rotation of `radians` around `axis` into this transform.
    ///
    /// The rotation matrix is built by [`algebra::rotation_about_axis`] over
    /// an identity seed and multiplied onto `self` from the right
    /// (`*self *= rotation`), so when the result is applied to a column
    /// vector, the rotation happens *before* the transform previously stored
    /// in `self`.
    ///
    /// Requires `N >= 3` (checked at runtime by the rotation builder).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::*;
    /// use std::f32::consts::TAU;
    ///
    /// let mut mat = Mat3f::identity();
    /// mat.rotate_about(vec3(0.0, 0.0, 1.0), TAU / 4.0);
    /// assert_approx_eq!(mat * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotate_about(&mut self, axis: Vector<T, 3>, radians: T)
    where
        T: Number + Trig + Sqrt,
    {
        let mut rotation = Self::identity();
        algebra::rotation_about_axis(&mut rotation, axis, radians);
        *self *= rotation;
    }
}

impl<T: Number, L: Layout> Matrix<T, 2, 2, L> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY
    /// plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the
    /// XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::from_columns([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

/// Sequential element writer created by [`Matrix::initializer`].
///
/// Writes values into consecutive logical slots in row-major order; the
/// physical storage layout of the target matrix does not affect the fill
/// order.
pub struct Initializer<'a, T, const R: usize, const C: usize, L: Layout> {
    matrix: &'a mut Matrix<T, R, C, L>,
    cursor: usize,
}

impl<'a, T, const R: usize, const C: usize, L: Layout> Initializer<'a, T, R, C, L> {
    /// Writes `value` to the next logical slot.
    ///
    /// # Panics
    ///
    /// Panics if all `R * C` elements have already been written.
    pub fn push(mut self, value: T) -> Self {
        assert!(
            self.cursor < R * C,
            "matrix initializer overflow: a {}x{} matrix holds {} elements",
            R,
            C,
            R * C,
        );
        self.matrix[(self.cursor / C, self.cursor % C)] = value;
        self.cursor += 1;
        self
    }

    /// Writes every value yielded by `values` to consecutive logical slots.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields more values than there are slots left.
    pub fn push_all<I: IntoIterator<Item = T>>(self, values: I) -> Self {
        values.into_iter().fold(self, Self::push)
    }

    /// Asserts that every element of the matrix has been written.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `R * C` values were pushed.
    pub fn finish(self) {
        assert_eq!(
            self.cursor,
            R * C,
            "matrix initializer finished after {} of {} elements",
            self.cursor,
            R * C,
        );
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize, L: Layout> fmt::Debug for Matrix<T, R, C, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize, L: Layout>(
            &'a Matrix<T, R, C, L>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize, L: Layout> fmt::Debug
            for FormatRow<'a, T, R, C, L>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize, L: Layout> Default for Matrix<T, R, C, L>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Hashes the elements in logical row-major order.
impl<T: Hash, const R: usize, const C: usize, L: Layout> Hash for Matrix<T, R, C, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for row in 0..R {
            for col in 0..C {
                self[(row, col)].hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, layout::RowMajor, vec2, vec3, Vec3f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn logical_order_is_layout_independent() {
        let cm = Matrix::<_, 2, 2, ColumnMajor>::from_rows([[1, 2], [3, 4]]);
        let rm = Matrix::<_, 2, 2, RowMajor>::from_rows([[1, 2], [3, 4]]);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(cm[(row, col)], rm[(row, col)]);
            }
        }
        assert_eq!(cm, rm);

        // Only the physical order differs.
        assert_eq!(rm.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(cm.as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn initializer_row_major_order() {
        let mut cm = Mat2::<i32>::zero();
        cm.initializer().push(1).push(2).push(3).push(4).finish();
        assert_eq!(cm[(0, 0)], 1);
        assert_eq!(cm[(0, 1)], 2);
        assert_eq!(cm[(1, 0)], 3);
        assert_eq!(cm[(1, 1)], 4);

        let mut rm = Matrix::<i32, 2, 2, RowMajor>::zero();
        rm.initializer().push_all([1, 2, 3, 4]).finish();
        assert_eq!(cm, rm);

        // The physical order is only the same for the row-major matrix.
        assert_eq!(rm.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(cm.as_slice(), &[1, 3, 2, 4]);
    }

    #[test]
    fn initializer_partial_fill() {
        let mut mat = Mat2::<i32>::identity();
        mat.initializer().push(7).push(8);
        assert_eq!(mat, Mat2::from_rows([[7, 8], [0, 1]]));
    }

    #[test]
    #[should_panic(expected = "matrix initializer overflow")]
    fn initializer_overflow() {
        let mut mat = Matrix::<i32, 1, 2>::zero();
        mat.initializer().push_all([1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "finished after 3 of 4 elements")]
    fn initializer_incomplete() {
        let mut mat = Mat2::<i32>::zero();
        mat.initializer().push_all([1, 2, 3]).finish();
    }

    #[test]
    fn diagonal() {
        let mat = Mat2::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Mat2::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Mat2::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn zero_and_identity() {
        assert_eq!(format!("{:?}", Mat2f::zero()), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(
            format!("{:?}", Mat2f::identity()),
            "[[1.0, 0.0], [0.0, 1.0]]"
        );

        let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
        mat.reset();
        assert_eq!(mat, Mat2::zero());
        mat.set_identity();
        assert_eq!(mat, Mat2::identity());
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Mat2::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Mat3::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::<_, 1, 2>::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn transpose_rectangular() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let transposed = mat.transpose();
        assert_eq!(transposed, Mat3x2::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(transposed.transpose(), mat);
    }

    #[test]
    fn transpose_in_place_matches_transpose() {
        fn check<L: Layout>() {
            let mat = Matrix::<_, 3, 3, L>::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
            let mut in_place = mat.clone();
            in_place.transpose_in_place();
            assert_eq!(in_place, mat.clone().transpose());
        }

        check::<ColumnMajor>();
        check::<RowMajor>();
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Mat2::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Mat2x3::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        #[rustfmt::skip]
        let b = Mat3x2::from_rows([
            [ 7,  8],
            [ 9, 10],
            [11, 12],
        ]);
        assert_eq!(a * b, Mat2::from_rows([[58, 64], [139, 154]]));
    }

    #[test]
    fn identity_absorption() {
        let mat = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(Mat2::<i32>::identity() * mat, mat);
        assert_eq!(mat * Mat2::<i32>::identity(), mat);

        let mat = Mat2::from_rows([[0.5f32, -2.0], [3.25, 4.0]]);
        assert_eq!(Mat2f::identity() * mat, mat);
        assert_eq!(mat * Mat2f::identity(), mat);
    }

    #[test]
    fn mul_associativity() {
        let a = Mat2::from_rows([[0.5f32, -2.0], [3.25, 4.0]]);
        let b = Mat2::from_rows([[1.5, 0.25], [-1.0, 2.0]]);
        let c = Mat2::from_rows([[3.0, 1.0], [0.5, -0.75]]);
        assert_approx_eq!((a * b) * c, a * (b * c), 1e-4);
    }

    #[test]
    fn mul_assign_applies_rhs_first() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[0, 1], [1, 0]]);
        let mut composed = a;
        composed *= b;
        assert_eq!(composed, a * b);
        assert_ne!(composed, b * a);
    }

    #[test]
    fn elementwise_ops() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2::from_rows([[9, 18], [27, 36]]));
        assert_eq!(a * 2, Mat2::from_rows([[2, 4], [6, 8]]));
        assert_eq!(-a, Mat2::from_rows([[-1, -2], [-3, -4]]));

        let mut acc = a;
        acc += b;
        acc -= a;
        acc *= 3;
        assert_eq!(acc, b * 3);
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        assert_eq!(cw, cw.inverse().unwrap());

        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, cw);

        let cw = Mat2f::rotation_clockwise(TAU / 2.0);
        assert_approx_eq!(cw, cw.inverse().unwrap(), 1e-6);
    }

    #[test]
    fn rotate_about_composes_right() {
        let mut mat = Mat3f::identity();
        mat.rotate_about(vec3(0.0, 0.0, 1.0), TAU / 4.0);
        assert_approx_eq!(mat * Vec3f::X, Vec3f::Y);
        assert_approx_eq!(mat * Vec3f::Y, -Vec3f::X);
    }

    #[test]
    fn uninit_roundtrip() {
        let mut mat = Matrix::<u32, 2, 3>::uninit();
        for row in 0..2 {
            for col in 0..3 {
                mat[(row, col)] = MaybeUninit::new((row * 3 + col) as u32);
            }
        }
        let mat = unsafe { mat.assume_init() };
        assert_eq!(mat, Mat2x3::from_rows([[0, 1, 2], [3, 4, 5]]));
    }

    #[test]
    fn cast() {
        let mat = Mat2::from_rows([[1.5f64, -2.5], [0.0, 4.0]]);
        assert_eq!(mat.cast::<i32>(), Mat2::from_rows([[1, -2], [0, 4]]));
    }

    #[test]
    fn raw_pointer_follows_layout() {
        let rm = Matrix::<_, 2, 2, RowMajor>::from_rows([[1, 2], [3, 4]]);
        let ptr = rm.as_ptr();
        let read: Vec<i32> = (0..4).map(|i| unsafe { *ptr.add(i) }).collect();
        assert_eq!(read, [1, 2, 3, 4]);

        let cm = rm.with_layout::<ColumnMajor>();
        let ptr = cm.as_ptr();
        let read: Vec<i32> = (0..4).map(|i| unsafe { *ptr.add(i) }).collect();
        assert_eq!(read, [1, 3, 2, 4]);

        // Writes through the mutable pointer land in the same physical slots.
        let mut cm = cm;
        unsafe {
            *cm.as_mut_ptr().add(1) = 7;
        }
        assert_eq!(cm[(1, 0)], 7);
    }

    #[test]
    fn constants() {
        assert_eq!(Mat2x3::<i32>::ROWS, 2);
        assert_eq!(Mat2x3::<i32>::COLUMNS, 3);
        assert_eq!(Mat2x3::<i32>::ELEMENTS, 6);
    }
}
