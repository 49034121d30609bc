//! Approximate equality.

use std::fmt;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their elements are within the tolerance.
///
/// For the subtleties of approximate floating-point comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The absolute tolerance type, [`f32`] or [`f64`] depending on which
    /// primitive is being compared.
    type Tolerance: Tolerance;

    /// Returns `true` if the absolute difference of `self` and `other` is at
    /// most `tolerance`.
    ///
    /// Infinities compare equal to themselves regardless of tolerance; `NaN`
    /// never compares equal to anything.
    fn approx_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;
}

/// The tolerance value of an [`ApproxEq`] implementation, supplying the
/// default used by [`assert_approx_eq!`][crate::assert_approx_eq].
pub trait Tolerance: Copy {
    const DEFAULT: Self;
}

impl Tolerance for f32 {
    const DEFAULT: Self = 1e-6;
}
impl Tolerance for f64 {
    const DEFAULT: Self = 1e-9;
}

impl ApproxEq for f32 {
    type Tolerance = Self;

    fn approx_eq(&self, other: &Self, tolerance: Self) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= tolerance
    }
}

impl ApproxEq for f64 {
    type Tolerance = Self;

    fn approx_eq(&self, other: &Self, tolerance: Self) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= tolerance
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &[U], tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn approx_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

#[doc(hidden)]
#[track_caller]
pub fn check_approx_eq<T, U>(left: &T, right: &U, tolerance: Option<T::Tolerance>)
where
    T: ApproxEq<U> + fmt::Debug,
    U: fmt::Debug,
{
    let tolerance = tolerance.unwrap_or(T::Tolerance::DEFAULT);
    if !left.approx_eq(right, tolerance) {
        panic!(
            "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
            left, right
        );
    }
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq`]).
///
/// An explicit absolute tolerance can be passed as a third argument; without
/// one, [`Tolerance::DEFAULT`] of the compared primitive is used.
///
/// # Examples
///
/// ```
/// # use linmat::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::check_approx_eq(&$left, &$right, ::core::option::Option::None)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::approx::check_approx_eq(
            &$left,
            &$right,
            ::core::option::Option::Some($tolerance),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0f64, 1.0 + f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "assertion `left ≈ right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn explicit_tolerance() {
        assert_approx_eq!(100.0, 99.0, 1.0);
        assert_approx_eq!(-1.0, 1.0, 2.0);
    }

    #[test]
    fn nan_and_inf() {
        assert!(!f32::NAN.approx_eq(&f32::NAN, 1.0));
        assert!(f32::INFINITY.approx_eq(&f32::INFINITY, 0.0));
        assert!(!f32::INFINITY.approx_eq(&f32::NEG_INFINITY, 0.0));
        assert!(!f32::MAX.approx_eq(&f32::INFINITY, 10000.0));
    }

    #[test]
    fn slices() {
        assert!([1.0f32, 2.0].approx_eq(&[1.0, 2.0 + 1e-7], 1e-6));
        assert!(![1.0f32, 2.0].approx_eq(&[1.0, 2.1], 1e-6));
    }
}
