//! Physical storage layout strategies for [`Matrix`][crate::Matrix].
//!
//! A layout decides how the logical `(row, column)` address of an element maps
//! to a physical slot in the backing array: [`RowMajor`] stores each row
//! contiguously (`row * C + col`), [`ColumnMajor`] stores each column
//! contiguously (`col * R + row`). The choice is a type parameter of
//! [`Matrix`][crate::Matrix], so code that needs a specific memory order for
//! interop (eg. uploading to a graphics API) can pick it per instantiation.
//!
//! Logical semantics are layout-invariant: for any layout, `mat[(r, c)]`
//! addresses the same logical element, and all operations produce logically
//! identical results. Only [`Matrix::as_slice`][crate::Matrix::as_slice] and
//! the linear-slot `Index<usize>` impls expose the physical order.

use std::{array, slice};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::RowMajor {}
    impl Sealed for super::ColumnMajor {}
}

/// A compile-time strategy mapping logical matrix positions to physical
/// storage.
///
/// This trait is sealed; [`RowMajor`] and [`ColumnMajor`] are the only
/// implementations.
pub trait Layout: sealed::Sealed + Sized + 'static {
    /// The backing store for an `R` x `C` matrix with elements of type `T`.
    ///
    /// Always a nested array with `R * C` elements total, contiguous in
    /// memory, in this layout's physical order.
    type Buf<T, const R: usize, const C: usize>;

    /// Creates a buffer by invoking `f` with the logical (row, column)
    /// position of every element.
    fn from_fn<T, F, const R: usize, const C: usize>(f: F) -> Self::Buf<T, R, C>
    where
        F: FnMut(usize, usize) -> T;

    /// Returns the element at logical position `(row, col)`, or [`None`] if
    /// out of bounds.
    fn get<T, const R: usize, const C: usize>(
        buf: &Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&T>;

    /// Mutable variant of [`Layout::get`].
    fn get_mut<T, const R: usize, const C: usize>(
        buf: &mut Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&mut T>;

    /// Returns the physical slot of logical position `(row, col)`.
    ///
    /// The result indexes into [`Layout::as_slice`]. `row` and `col` must be
    /// in bounds.
    fn offset<const R: usize, const C: usize>(row: usize, col: usize) -> usize;

    /// Views the buffer as a flat slice of `R * C` elements in physical
    /// order.
    fn as_slice<T, const R: usize, const C: usize>(buf: &Self::Buf<T, R, C>) -> &[T];

    /// Mutable variant of [`Layout::as_slice`].
    fn as_mut_slice<T, const R: usize, const C: usize>(buf: &mut Self::Buf<T, R, C>) -> &mut [T];
}

/// Row-major storage: rows are contiguous, element `(r, c)` lives at physical
/// slot `r * C + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowMajor {}

/// Column-major storage: columns are contiguous, element `(r, c)` lives at
/// physical slot `c * R + r`.
///
/// This is the default layout, and the order expected by OpenGL-style APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnMajor {}

impl Layout for RowMajor {
    type Buf<T, const R: usize, const C: usize> = [[T; C]; R];

    fn from_fn<T, F, const R: usize, const C: usize>(mut f: F) -> Self::Buf<T, R, C>
    where
        F: FnMut(usize, usize) -> T,
    {
        array::from_fn(|row| array::from_fn(|col| f(row, col)))
    }

    #[inline]
    fn get<T, const R: usize, const C: usize>(
        buf: &Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&T> {
        buf.get(row).and_then(|row| row.get(col))
    }

    #[inline]
    fn get_mut<T, const R: usize, const C: usize>(
        buf: &mut Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&mut T> {
        buf.get_mut(row).and_then(|row| row.get_mut(col))
    }

    #[inline]
    fn offset<const R: usize, const C: usize>(row: usize, col: usize) -> usize {
        row * C + col
    }

    #[inline]
    fn as_slice<T, const R: usize, const C: usize>(buf: &Self::Buf<T, R, C>) -> &[T] {
        // Safety: `[[T; C]; R]` is `R * C` contiguous `T`s.
        unsafe { slice::from_raw_parts(buf.as_ptr().cast(), R * C) }
    }

    #[inline]
    fn as_mut_slice<T, const R: usize, const C: usize>(buf: &mut Self::Buf<T, R, C>) -> &mut [T] {
        // Safety: `[[T; C]; R]` is `R * C` contiguous `T`s.
        unsafe { slice::from_raw_parts_mut(buf.as_mut_ptr().cast(), R * C) }
    }
}

impl Layout for ColumnMajor {
    type Buf<T, const R: usize, const C: usize> = [[T; R]; C];

    fn from_fn<T, F, const R: usize, const C: usize>(mut f: F) -> Self::Buf<T, R, C>
    where
        F: FnMut(usize, usize) -> T,
    {
        array::from_fn(|col| array::from_fn(|row| f(row, col)))
    }

    #[inline]
    fn get<T, const R: usize, const C: usize>(
        buf: &Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&T> {
        buf.get(col).and_then(|col| col.get(row))
    }

    #[inline]
    fn get_mut<T, const R: usize, const C: usize>(
        buf: &mut Self::Buf<T, R, C>,
        row: usize,
        col: usize,
    ) -> Option<&mut T> {
        buf.get_mut(col).and_then(|col| col.get_mut(row))
    }

    #[inline]
    fn offset<const R: usize, const C: usize>(row: usize, col: usize) -> usize {
        col * R + row
    }

    #[inline]
    fn as_slice<T, const R: usize, const C: usize>(buf: &Self::Buf<T, R, C>) -> &[T] {
        // Safety: `[[T; R]; C]` is `R * C` contiguous `T`s.
        unsafe { slice::from_raw_parts(buf.as_ptr().cast(), R * C) }
    }

    #[inline]
    fn as_mut_slice<T, const R: usize, const C: usize>(buf: &mut Self::Buf<T, R, C>) -> &mut [T] {
        // Safety: `[[T; R]; C]` is `R * C` contiguous `T`s.
        unsafe { slice::from_raw_parts_mut(buf.as_mut_ptr().cast(), R * C) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_order() {
        let rm = <RowMajor as Layout>::from_fn::<_, _, 2, 3>(|r, c| (r, c));
        assert_eq!(
            RowMajor::as_slice(&rm),
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );

        let cm = <ColumnMajor as Layout>::from_fn::<_, _, 2, 3>(|r, c| (r, c));
        assert_eq!(
            ColumnMajor::as_slice(&cm),
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn logical_access_is_layout_invariant() {
        let rm = <RowMajor as Layout>::from_fn::<_, _, 3, 2>(|r, c| r * 10 + c);
        let cm = <ColumnMajor as Layout>::from_fn::<_, _, 3, 2>(|r, c| r * 10 + c);
        for r in 0..3 {
            for c in 0..2 {
                assert_eq!(RowMajor::get(&rm, r, c), ColumnMajor::get(&cm, r, c));
            }
        }
        assert_eq!(RowMajor::get(&rm, 3, 0), None);
        assert_eq!(ColumnMajor::get(&cm, 0, 2), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(RowMajor::offset::<2, 3>(1, 2), 5);
        assert_eq!(ColumnMajor::offset::<2, 3>(1, 2), 5);
        assert_eq!(RowMajor::offset::<2, 3>(0, 1), 1);
        assert_eq!(ColumnMajor::offset::<2, 3>(0, 1), 2);
    }
}
