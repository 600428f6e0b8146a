//! Ready-made result policies.
//!
//! The engine reports its findings through a [`RelatePolicy`]. Depending on
//! what you need, you might want a simple yes-or-no answer ([`Intersects`]),
//! the intersection points themselves ([`Points`]), or everything the engine
//! knows ([`Classify`]).

use std::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::collinear::CollinearInfo;
use crate::geom::{Point, Segment};
use crate::num::{Coord, Robust};
use crate::ratio::RobustRatio;
use crate::relate::{IntersectionInfo, RelatePolicy};
use crate::side::SideInfo;

/// A policy that only asks whether the segments intersect.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intersects;

impl<T: Coord, W: Robust> RelatePolicy<T, W> for Intersects {
    type Output = bool;

    fn disjoint(&self) -> bool {
        false
    }

    fn degenerate(&self, _segment: &Segment<T>, _a_degenerate: bool) -> bool {
        true
    }

    fn segments_cross(
        &self,
        _sides: &SideInfo,
        _info: &IntersectionInfo<T, W>,
        _a: &Segment<T>,
        _b: &Segment<T>,
    ) -> bool {
        true
    }

    fn segments_collinear(
        &self,
        _a: &Segment<T>,
        _b: &Segment<T>,
        _ratios: &CollinearInfo<W>,
    ) -> bool {
        true
    }
}

/// The four kinds of outcome, without any of their data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum RelationKind {
    /// The segments don't intersect.
    Disjoint,
    /// One of the segments is a point on the other.
    Degenerate,
    /// The segments cross or touch at a single point.
    Cross,
    /// The segments are collinear and overlap.
    Collinear,
}

/// Everything the engine found out, as returned by the [`Classify`] policy.
#[derive(Clone, Debug)]
pub enum Relation<T: Coord, W> {
    /// The segments don't intersect.
    Disjoint,
    /// One of the segments is a point on the other.
    Degenerate {
        /// The point.
        point: Point<T>,
        /// Was the first segment the degenerate one?
        a_degenerate: bool,
    },
    /// The segments cross or touch at a single point.
    Cross {
        /// The sides of each segment's endpoints relative to the other segment.
        sides: SideInfo,
        /// Where the segments cross.
        info: IntersectionInfo<T, W>,
    },
    /// The segments are collinear and overlap.
    Collinear(CollinearInfo<W>),
}

impl<T: Coord, W> Relation<T, W> {
    /// What kind of relation is this?
    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::Disjoint => RelationKind::Disjoint,
            Relation::Degenerate { .. } => RelationKind::Degenerate,
            Relation::Cross { .. } => RelationKind::Cross,
            Relation::Collinear(_) => RelationKind::Collinear,
        }
    }

    /// Do the segments intersect?
    pub fn intersects(&self) -> bool {
        self.kind() != RelationKind::Disjoint
    }
}

impl<T: Coord, W: Robust> PartialEq for Relation<T, W> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Relation::Disjoint, Relation::Disjoint) => true,
            (
                Relation::Degenerate {
                    point: p0,
                    a_degenerate: a0,
                },
                Relation::Degenerate {
                    point: p1,
                    a_degenerate: a1,
                },
            ) => p0 == p1 && a0 == a1,
            (
                Relation::Cross {
                    sides: s0,
                    info: i0,
                },
                Relation::Cross {
                    sides: s1,
                    info: i1,
                },
            ) => s0 == s1 && i0 == i1,
            (Relation::Collinear(c0), Relation::Collinear(c1)) => c0 == c1,
            _ => false,
        }
    }
}

/// A policy that returns a [`Relation`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Classify;

impl<T: Coord, W: Robust> RelatePolicy<T, W> for Classify {
    type Output = Relation<T, W>;

    fn disjoint(&self) -> Self::Output {
        Relation::Disjoint
    }

    fn degenerate(&self, segment: &Segment<T>, a_degenerate: bool) -> Self::Output {
        Relation::Degenerate {
            point: segment.start,
            a_degenerate,
        }
    }

    fn segments_cross(
        &self,
        sides: &SideInfo,
        info: &IntersectionInfo<T, W>,
        _a: &Segment<T>,
        _b: &Segment<T>,
    ) -> Self::Output {
        Relation::Cross {
            sides: *sides,
            info: info.clone(),
        }
    }

    fn segments_collinear(
        &self,
        _a: &Segment<T>,
        _b: &Segment<T>,
        ratios: &CollinearInfo<W>,
    ) -> Self::Output {
        Relation::Collinear(ratios.clone())
    }
}

/// The points where two segments intersect, as returned by the [`Points`] policy.
///
/// There are no points if the segments are disjoint, one point if they
/// cross (or touch, or one of them is a point on the other), and two points
/// if they overlap along a stretch. In that last case, the points are the
/// ends of the overlap, in the direction of the first segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntersectionPoints<T> {
    points: ArrayVec<Point<T>, 2>,
    collinear: bool,
}

impl<T> IntersectionPoints<T> {
    fn none() -> Self {
        IntersectionPoints {
            points: ArrayVec::new(),
            collinear: false,
        }
    }

    fn one(p: Point<T>) -> Self {
        let mut points = ArrayVec::new();
        points.push(p);
        IntersectionPoints {
            points,
            collinear: false,
        }
    }

    /// The intersection points.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// The number of intersection points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Are there no intersection points?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Did these points come from collinear segments?
    pub fn is_collinear(&self) -> bool {
        self.collinear
    }
}

/// A policy that returns [`IntersectionPoints`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Points;

impl<T: Coord, W: Robust> RelatePolicy<T, W> for Points {
    type Output = IntersectionPoints<T>;

    fn disjoint(&self) -> Self::Output {
        IntersectionPoints::none()
    }

    fn degenerate(&self, segment: &Segment<T>, _a_degenerate: bool) -> Self::Output {
        IntersectionPoints::one(segment.start)
    }

    fn segments_cross(
        &self,
        _sides: &SideInfo,
        info: &IntersectionInfo<T, W>,
        a: &Segment<T>,
        _b: &Segment<T>,
    ) -> Self::Output {
        IntersectionPoints::one(info.point(a))
    }

    fn segments_collinear(
        &self,
        a: &Segment<T>,
        b: &Segment<T>,
        ratios: &CollinearInfo<W>,
    ) -> Self::Output {
        // The ends of the overlap are endpoints of one segment that lie on
        // the other. We collect them, keyed by their position along a.
        // Degenerate ratios don't locate anything, so they're skipped; the
        // rest are totally ordered.
        let on = |r: &RobustRatio<W>| !r.is_degenerate() && r.is_on_segment();
        let mut candidates: ArrayVec<(RobustRatio<W>, Point<T>), 4> = ArrayVec::new();
        if on(&ratios.ra_from) {
            candidates.push((RobustRatio::zero(), a.start));
        }
        if on(&ratios.ra_to) {
            candidates.push((RobustRatio::one(), a.end));
        }
        if on(&ratios.rb_from) {
            candidates.push((ratios.rb_from.clone(), b.start));
        }
        if on(&ratios.rb_to) {
            candidates.push((ratios.rb_to.clone(), b.end));
        }
        candidates.sort_by(|(r0, _), (r1, _)| r0.partial_cmp(r1).unwrap_or(Ordering::Equal));

        let mut ret = IntersectionPoints {
            points: ArrayVec::new(),
            collinear: true,
        };
        if let (Some(first), Some(last)) = (candidates.first(), candidates.last()) {
            ret.points.push(first.1);
            if first.0 != last.0 {
                ret.points.push(last.1);
            }
        }
        ret
    }
}
