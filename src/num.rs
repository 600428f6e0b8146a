//! A thin abstraction over the different numerical types we support.
//!
//! There are two families here. [`Robust`] types are the ones that
//! classification decisions get made in: integers on a snapped grid, exact
//! rationals, or (if you're feeling brave) plain floats. [`Coord`] types are
//! the caller's original coordinates, which are only used to compute the
//! numerical position of an intersection.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use malachite::Rational;
use ordered_float::{NotNan, OrderedFloat};

/// A trait for abstracting over the properties we need from robust coordinate types.
///
/// This is implemented for `i32`, `i64`, `i128`, `malachite::Rational`,
/// `NotNan<f64>` and `OrderedFloat<f64>`.
///
/// Determinants of robust coordinates are computed in the associated
/// [`Wide`](Robust::Wide) type. For the integer types, this means that the
/// determinants are exact as long as the coordinates are not too large:
/// `i32` coordinates are always fine, and `i64` coordinates need to lie
/// in `[-2^61, 2^61]`. (Cramer's rule multiplies differences from two
/// segments and adds two such products, so it needs two more bits than the
/// coordinates' differences squared.) `i128` is mainly here to be a wide
/// type; if you use it for coordinates directly, the same bound applies.
///
/// The float implementations are not exact. They're here so that you can run
/// the engine on unmodified input coordinates, but then you're on your own
/// as far as robustness goes. They also panic if a determinant overflows,
/// so keep their magnitudes below `1e150`.
pub trait Robust:
    Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Neg<Output = Self>
    + Clone
    + Debug
    + Ord
    + Eq
    + 'static
{
    /// The type that determinants get computed in.
    type Wide: Robust<Wide = Self::Wide>;

    /// Zero.
    fn zero() -> Self;

    /// One.
    fn one() -> Self;

    /// Convert to the wide type, without losing precision.
    fn widen(&self) -> Self::Wide;

    /// The absolute value.
    fn abs(self) -> Self;

    /// Convert this number to a rational, for exact comparison.
    ///
    /// # Panics
    ///
    /// The float implementations panic if the value is infinite.
    fn to_exact(&self) -> Rational;
}

impl Robust for i32 {
    type Wide = i128;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn widen(&self) -> i128 {
        i128::from(*self)
    }

    fn abs(self) -> Self {
        i32::abs(self)
    }

    fn to_exact(&self) -> Rational {
        Rational::from(*self)
    }
}

impl Robust for i64 {
    type Wide = i128;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn widen(&self) -> i128 {
        i128::from(*self)
    }

    fn abs(self) -> Self {
        i64::abs(self)
    }

    fn to_exact(&self) -> Rational {
        Rational::from(*self)
    }
}

impl Robust for i128 {
    type Wide = i128;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn widen(&self) -> i128 {
        *self
    }

    fn abs(self) -> Self {
        i128::abs(self)
    }

    fn to_exact(&self) -> Rational {
        Rational::from(*self)
    }
}

impl Robust for Rational {
    type Wide = Rational;

    fn zero() -> Self {
        Rational::from(0)
    }

    fn one() -> Self {
        Rational::from(1)
    }

    fn widen(&self) -> Rational {
        self.clone()
    }

    fn abs(self) -> Self {
        <Rational as malachite::num::arithmetic::traits::Abs>::abs(self)
    }

    fn to_exact(&self) -> Rational {
        self.clone()
    }
}

impl Robust for NotNan<f64> {
    type Wide = NotNan<f64>;

    fn zero() -> Self {
        NotNan::from(0u8)
    }

    fn one() -> Self {
        NotNan::from(1u8)
    }

    fn widen(&self) -> Self {
        *self
    }

    fn abs(self) -> Self {
        self.max(-self)
    }

    fn to_exact(&self) -> Rational {
        self.into_inner().try_into().unwrap()
    }
}

impl Robust for OrderedFloat<f64> {
    type Wide = OrderedFloat<f64>;

    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn one() -> Self {
        OrderedFloat(1.0)
    }

    fn widen(&self) -> Self {
        *self
    }

    fn abs(self) -> Self {
        self.into_inner().abs().into()
    }

    fn to_exact(&self) -> Rational {
        self.into_inner().try_into().unwrap()
    }
}

/// A trait for the caller's coordinate types.
///
/// These coordinates are never used for making decisions, only for
/// computing the (approximate) position of a crossing. That computation
/// happens in the [`Promoted`](Coord::Promoted) type, which should be
/// at least as precise as the coordinate type itself.
///
/// This is implemented for `f32` (promoted to `f64`) and `f64`.
pub trait Coord:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + 'static
{
    /// The type that the crossing ratio gets computed in.
    type Promoted: Coord<Promoted = Self::Promoted>;

    /// Zero.
    fn zero() -> Self;

    /// One.
    fn one() -> Self;

    /// Convert to the promoted type.
    fn promote(self) -> Self::Promoted;

    /// Convert back from the promoted type, possibly with rounding.
    fn demote(p: Self::Promoted) -> Self;

    /// Is this not a number?
    fn is_nan(self) -> bool;

    /// Is this infinite?
    fn is_infinite(self) -> bool;
}

impl Coord for f64 {
    type Promoted = f64;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn promote(self) -> f64 {
        self
    }

    fn demote(p: f64) -> Self {
        p
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

impl Coord for f32 {
    type Promoted = f64;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn promote(self) -> f64 {
        f64::from(self)
    }

    fn demote(p: f64) -> Self {
        p as f32
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}
