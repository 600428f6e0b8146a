#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod collinear;
mod geom;
mod num;
pub mod policy;
mod ratio;
mod relate;
mod side;

use malachite::Rational;
use ordered_float::NotNan;

pub use collinear::{relate_collinear, CollinearInfo, CollinearOutcome};
pub use geom::{Axis, Point, Segment};
pub use num::{Coord, Robust};
pub use policy::{IntersectionPoints, Relation};
pub use ratio::RobustRatio;
pub use relate::{relate, IntersectionInfo, RelatePolicy};
pub use side::{side, Side, SideInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The input points were faulty.
pub enum Error {
    /// At least one of the inputs was infinite.
    Infinity,
    /// At least one of the inputs was not a number.
    NaN,
    /// At least one of the inputs was too large to compute with.
    Overflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Infinity => write!(f, "one of the inputs was infinite"),
            Error::NaN => write!(f, "one of the inputs had a NaN"),
            Error::Overflow => write!(f, "one of the inputs was too large"),
        }
    }
}

impl std::error::Error for Error {}

fn check_finite(a: &Segment<f64>, b: &Segment<f64>) -> Result<(), Error> {
    a.check_finite()?;
    b.check_finite()
}

/// Relates two segments, using exact rational arithmetic for all the decisions.
///
/// This is the most robust option: every `f64` is exactly representable as a
/// rational, so the decisions are exactly right for the input coordinates.
/// It's also the slowest.
pub fn relate_exact<P>(a: &Segment<f64>, b: &Segment<f64>, policy: &P) -> Result<P::Output, Error>
where
    P: RelatePolicy<f64, Rational>,
{
    check_finite(a, b)?;
    let robust_a = a.to_exact()?;
    let robust_b = b.to_exact()?;
    Ok(relate(a, b, &robust_a, &robust_b, policy))
}

// Determinants are sums of two products of coordinate differences. With
// coordinates below this, they stay below 8e300.
const UNSCALED_LIMIT: f64 = 1e150;

fn not_nan(p: Point<f64>) -> Result<Point<NotNan<f64>>, Error> {
    let coord = |x: f64| {
        if x.abs() > UNSCALED_LIMIT {
            return Err(Error::Overflow);
        }
        NotNan::new(x).map_err(|_| Error::NaN)
    };
    Ok(Point::new(coord(p.x)?, coord(p.y)?))
}

/// Relates two segments, making the decisions on the original coordinates.
///
/// No rescaling or conversion takes place, so the decisions are made in
/// floating point. The engine's results are still internally consistent
/// (in particular, a crossing ratio always lies between zero and one) but
/// nearly-parallel or nearly-touching segments may be misclassified.
///
/// Returns [`Error::Overflow`] if any coordinate has magnitude larger than
/// `1e150`, because the determinants might overflow.
pub fn relate_unscaled<P>(
    a: &Segment<f64>,
    b: &Segment<f64>,
    policy: &P,
) -> Result<P::Output, Error>
where
    P: RelatePolicy<f64, NotNan<f64>>,
{
    check_finite(a, b)?;
    let robust_a = Segment {
        start: not_nan(a.start)?,
        end: not_nan(a.end)?,
    };
    let robust_b = Segment {
        start: not_nan(b.start)?,
        end: not_nan(b.end)?,
    };
    Ok(relate(a, b, &robust_a, &robust_b, policy))
}

/// Computes the points where two segments intersect.
///
/// See [`IntersectionPoints`] for what you get back.
pub fn intersection_points(
    a: &Segment<f64>,
    b: &Segment<f64>,
) -> Result<IntersectionPoints<f64>, Error> {
    relate_exact(a, b, &policy::Points)
}

/// Computes the relationship between two segments.
pub fn relation(a: &Segment<f64>, b: &Segment<f64>) -> Result<Relation<f64, Rational>, Error> {
    relate_exact(a, b, &policy::Classify)
}
