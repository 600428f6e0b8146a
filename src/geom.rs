//! Geometric primitives, like points and segments.

use malachite::Rational;

use crate::num::{Coord, Robust};
use crate::Error;

/// A two-dimensional point.
///
/// The coordinate type is up to you: the caller's original coordinates are
/// usually floats (see [`Coord`]), while their robust counterparts are
/// integers or rationals (see [`Robust`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Point<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T> Point<T> {
    /// Create a new point.
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// The coordinate along `axis`.
    pub fn coord(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Apply a function to both coordinates.
    ///
    /// This is handy for building robust points out of the original ones.
    pub fn map<S>(self, mut f: impl FnMut(T) -> S) -> Point<S> {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl<T: Coord> Point<T> {
    /// Compute an affine combination between `self` and `other`; that is,
    /// `self + t * (other - self)`.
    ///
    /// The arithmetic happens in the promoted type.
    pub fn affine(&self, other: &Self, t: T::Promoted) -> Self {
        let x = self.x.promote() + t * (other.x - self.x).promote();
        let y = self.y.promote() + t * (other.y - self.y).promote();
        Point {
            x: T::demote(x),
            y: T::demote(y),
        }
    }

    /// Returns an error if either coordinate is infinite or NaN.
    pub fn check_finite(&self) -> Result<(), Error> {
        if self.x.is_infinite() || self.y.is_infinite() {
            return Err(Error::Infinity);
        }
        if self.x.is_nan() || self.y.is_nan() {
            return Err(Error::NaN);
        }
        Ok(())
    }
}

impl Point<f64> {
    /// Convert to a `kurbo` point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    /// Convert to a point with exact rational coordinates.
    pub fn to_exact(self) -> Result<Point<Rational>, Error> {
        Ok(Point {
            x: exact(self.x)?,
            y: exact(self.y)?,
        })
    }
}

fn exact(x: f64) -> Result<Rational, Error> {
    if x.is_nan() {
        return Err(Error::NaN);
    }
    Rational::try_from(x).map_err(|_| Error::Infinity)
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A directed line segment.
///
/// The segment is allowed to be degenerate, in which case it's really just a point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Segment<T> {
    /// The starting point.
    pub start: Point<T>,
    /// The ending point.
    pub end: Point<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.start, self.end)
    }
}

impl<T> Segment<T> {
    /// Create a new segment.
    pub fn new(start: impl Into<Point<T>>, end: impl Into<Point<T>>) -> Self {
        Segment {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The same segment, pointing the other way.
    pub fn reversed(self) -> Self {
        Segment {
            start: self.end,
            end: self.start,
        }
    }

    /// Apply a function to all the coordinates.
    pub fn map<S>(self, mut f: impl FnMut(T) -> S) -> Segment<S> {
        Segment {
            start: self.start.map(&mut f),
            end: self.end.map(&mut f),
        }
    }
}

impl<T: PartialEq> Segment<T> {
    /// Is this segment just a single point?
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl<T: Coord> Segment<T> {
    /// The horizontal extent, signed according to the segment's direction.
    pub fn dx(&self) -> T {
        self.end.x - self.start.x
    }

    /// The vertical extent, signed according to the segment's direction.
    pub fn dy(&self) -> T {
        self.end.y - self.start.y
    }

    /// Returns an error if any coordinate is infinite or NaN.
    pub fn check_finite(&self) -> Result<(), Error> {
        self.start.check_finite()?;
        self.end.check_finite()
    }
}

impl<R: Robust> Segment<R> {
    /// The horizontal and vertical extents, in the wide type.
    pub(crate) fn wide_delta(&self) -> (R::Wide, R::Wide) {
        (
            self.end.x.widen() - self.start.x.widen(),
            self.end.y.widen() - self.start.y.widen(),
        )
    }
}

impl Segment<f64> {
    /// Convert to a `kurbo` line.
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.start.to_kurbo(), self.end.to_kurbo())
    }

    /// Convert to a segment with exact rational coordinates.
    pub fn to_exact(&self) -> Result<Segment<Rational>, Error> {
        Ok(Segment {
            start: self.start.to_exact()?,
            end: self.end.to_exact()?,
        })
    }
}

impl From<kurbo::Line> for Segment<f64> {
    fn from(line: kurbo::Line) -> Self {
        Segment::new(line.p0, line.p1)
    }
}

/// One of the two coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Chooses the axis along which two (collinear) segments are longer.
    ///
    /// Projecting onto this axis avoids dividing by something tiny when
    /// the segments are close to axis-aligned. Ties go to `X`.
    pub fn dominant<W: Robust>(dx_a: &W, dy_a: &W, dx_b: &W, dy_b: &W) -> Axis {
        let extent_x = dx_a.clone().abs() + dx_b.clone().abs();
        let extent_y = dy_a.clone().abs() + dy_b.clone().abs();
        if extent_x >= extent_y {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::num::tests::Reasonable;
    use proptest::prelude::*;

    impl<T: Reasonable + std::fmt::Debug + 'static> Reasonable for Point<T>
    where
        T::Strategy: 'static,
    {
        type Strategy = BoxedStrategy<Point<T>>;

        fn reasonable() -> Self::Strategy {
            (T::reasonable(), T::reasonable())
                .prop_map(|(x, y)| Point::new(x, y))
                .boxed()
        }
    }

    impl<T: Reasonable + std::fmt::Debug + 'static> Reasonable for Segment<T>
    where
        T::Strategy: 'static,
    {
        type Strategy = BoxedStrategy<Segment<T>>;

        fn reasonable() -> Self::Strategy {
            (Point::<T>::reasonable(), Point::<T>::reasonable())
                .prop_map(|(start, end)| Segment { start, end })
                .boxed()
        }
    }

    #[test]
    fn finiteness() {
        let ok = Segment::new((0.0, 1.0), (2.0, 3.0));
        assert_eq!(ok.check_finite(), Ok(()));

        let inf = Segment::new((0.0, f64::INFINITY), (2.0, 3.0));
        assert_eq!(inf.check_finite(), Err(Error::Infinity));

        let nan = Segment::new((0.0, 1.0), (f64::NAN, 3.0));
        assert_eq!(nan.check_finite(), Err(Error::NaN));
        assert_eq!(nan.to_exact().map(|_| ()), Err(Error::NaN));
    }

    #[test]
    fn dominant_axis() {
        assert_eq!(Axis::dominant(&3i128, &1, &-3, &2), Axis::X);
        assert_eq!(Axis::dominant(&0i128, &5, &0, &-5), Axis::Y);
        // Ties go to X.
        assert_eq!(Axis::dominant(&2i128, &-2, &0, &0), Axis::X);
    }

    #[test]
    fn affine_in_promoted_type() {
        let p = Point::new(0.0f32, 0.0);
        let q = Point::new(3.0f32, 6.0);
        assert_eq!(p.affine(&q, 1.0 / 3.0), Point::new(1.0, 2.0));
    }

    #[test]
    fn kurbo_round_trip() {
        let line = kurbo::Line::new((1.0, 2.0), (3.0, 4.0));
        let seg = Segment::from(line);
        assert_eq!(seg.start, Point::new(1.0, 2.0));
        assert_eq!(seg.to_kurbo(), line);
    }

    proptest! {
        #[test]
        fn exact_conversion(p in Point::<f64>::reasonable()) {
            let exact = p.to_exact().unwrap();
            prop_assert_eq!(exact.x, Rational::try_from(p.x).unwrap());
            prop_assert_eq!(exact.y, Rational::try_from(p.y).unwrap());
        }
    }
}
