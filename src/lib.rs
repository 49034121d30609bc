//! Fixed-size vectors and matrices for geometry-style computation.
//!
//! # Motivation
//!
//! Applications that shuffle transforms, rotations and projections around rarely
//! need arbitrary-size linear algebra, but they do need small fixed-size vector
//! and matrix types that are cheap to copy, easy to read, and stable enough to
//! expose in public APIs. This crate provides exactly that and nothing more:
//!
//! - Dimensions are `const` generic parameters. Every shape mismatch is a
//!   compile-time error; there is no runtime dimension checking to get wrong.
//! - Types are plain values with array-backed storage. Copying copies the
//!   elements, nothing aliases, and [`bytemuck`] impls allow safe
//!   transmutation for interop with graphics APIs.
//! - The element type is generic over a small set of scalar traits, but only
//!   [`Copy`] numeric types are supported (no "big decimal" style elements).
//!
//! # Storage layout
//!
//! [`Matrix`] takes a [`Layout`] strategy parameter selecting row-major or
//! column-major physical storage per instantiation, defaulting to
//! [`ColumnMajor`]. The layout never changes what `(row, column)` indexing
//! means; it only decides which physical slot an element lands in, and
//! therefore how the contiguous view returned by [`Matrix::as_slice`] is
//! ordered. See the [`layout`] module for details.
//!
//! # Features
//!
//! - `double-precision`: makes the [`Real`] alias `f64` instead of `f32`.
//! - `swizzle`: multi-component accessor methods on vectors (`v.zyx()` etc).

pub mod algebra;
pub mod approx;
pub mod layout;
mod matrix;
mod traits;
mod vector;

pub use layout::{ColumnMajor, Layout, RowMajor};
pub use matrix::*;
pub use traits::*;
pub use vector::*;

/// The default scalar type for the `*r` type aliases.
///
/// This is `f32` unless the `double-precision` feature is enabled.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The default scalar type for the `*r` type aliases.
///
/// This is `f64` because the `double-precision` feature is enabled.
#[cfg(feature = "double-precision")]
pub type Real = f64;
