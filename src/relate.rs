//! The segment relation engine.
//!
//! [`relate`] takes two segments, together with their robust counterparts,
//! and decides whether they are disjoint, whether one of them is a point
//! lying on the other, whether they cross, or whether they are collinear and
//! overlap. All of the decisions are made using the robust coordinates. The
//! original coordinates are only used to compute a numerical crossing ratio.
//!
//! The outcome is reported to a [`RelatePolicy`], which gets to decide what
//! the caller actually sees.

use std::ops::{Mul, Sub};

use crate::collinear::{relate_collinear, CollinearInfo, CollinearOutcome};
use crate::geom::{Axis, Point, Segment};
use crate::num::{Coord, Robust};
use crate::ratio::RobustRatio;
use crate::side::SideInfo;

/// Everything we know about a crossing.
#[derive(Clone, Debug)]
pub struct IntersectionInfo<T: Coord, W> {
    /// The horizontal extent of the first segment.
    pub dx_a: T,
    /// The vertical extent of the first segment.
    pub dy_a: T,
    /// The horizontal extent of the second segment.
    pub dx_b: T,
    /// The vertical extent of the second segment.
    pub dy_b: T,
    /// The position of the crossing along the first segment, computed from
    /// the original coordinates. This is always between zero and one.
    pub r: T::Promoted,
    /// The position of the crossing along the first segment, computed from
    /// the robust coordinates.
    pub robust_ra: RobustRatio<W>,
    /// The position of the crossing along the second segment, computed from
    /// the robust coordinates.
    pub robust_rb: RobustRatio<W>,
}

impl<T: Coord, W: Robust> PartialEq for IntersectionInfo<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.dx_a == other.dx_a
            && self.dy_a == other.dy_a
            && self.dx_b == other.dx_b
            && self.dy_b == other.dy_b
            && self.r == other.r
            && self.robust_ra == other.robust_ra
            && self.robust_rb == other.robust_rb
    }
}

impl<T: Coord, W> IntersectionInfo<T, W> {
    /// The crossing point, computed from the first segment's start point and `r`.
    pub fn point(&self, a: &Segment<T>) -> Point<T> {
        let x = a.start.x.promote() + self.r * self.dx_a.promote();
        let y = a.start.y.promote() + self.r * self.dy_a.promote();
        Point::new(T::demote(x), T::demote(y))
    }
}

/// Turns the engine's classification into something the caller wants.
///
/// The engine calls exactly one of these methods per invocation of [`relate`].
/// See the [`policy`](crate::policy) module for some ready-made implementations.
pub trait RelatePolicy<T: Coord, W: Robust> {
    /// The type of the result.
    type Output;

    /// The segments don't intersect.
    fn disjoint(&self) -> Self::Output;

    /// One of the segments is just a point, and it lies on the other segment.
    ///
    /// `segment` is the degenerate one, and `a_degenerate` is true if it was
    /// the first argument. If both segments are the same point, this gets
    /// called with the first one.
    fn degenerate(&self, segment: &Segment<T>, a_degenerate: bool) -> Self::Output;

    /// The segments cross (or touch) at a single point.
    fn segments_cross(
        &self,
        sides: &SideInfo,
        info: &IntersectionInfo<T, W>,
        a: &Segment<T>,
        b: &Segment<T>,
    ) -> Self::Output;

    /// The segments are collinear and overlap, possibly at a single point.
    fn segments_collinear(
        &self,
        a: &Segment<T>,
        b: &Segment<T>,
        ratios: &CollinearInfo<W>,
    ) -> Self::Output;
}

// Cramer's rule for the intersection of a and b, where (wx, wy) is the
// vector from b's start to a's start. Returns (d, da): the crossing is at
// da / d along a, and d is zero if and only if a and b are parallel.
fn cramers_rule<N>(dx_a: N, dy_a: N, dx_b: N, dy_b: N, wx: N, wy: N) -> (N, N)
where
    N: Clone + Sub<N, Output = N> + Mul<N, Output = N>,
{
    let d = dx_a * dy_b.clone() - dy_a * dx_b.clone();
    let da = dx_b * wy - dy_b * wx;
    (d, da)
}

fn clamp_ratio<N: Coord>(r: N) -> N {
    if r < N::zero() {
        log::debug!("clamping crossing ratio {r:?} up to zero");
        N::zero()
    } else if r > N::one() {
        log::debug!("clamping crossing ratio {r:?} down to one");
        N::one()
    } else {
        r
    }
}

/// Relates two segments.
///
/// `a` and `b` are the segments in the caller's coordinates, and `robust_a`
/// and `robust_b` are the same segments in robust coordinates. Every decision
/// about the relationship between the segments is made with the robust
/// coordinates, so they had better describe the same geometry. The original
/// coordinates are only used for the floating-point crossing ratio.
///
/// The checks happen in this order:
///
/// 1. If both segments are points, they're either the same point
///    ([`degenerate`](RelatePolicy::degenerate)) or disjoint.
/// 2. If either segment lies strictly on one side of the other, they're
///    disjoint. This applies to a single point too.
/// 3. If one segment is a point, it lies on the other segment's line and
///    it's [`degenerate`](RelatePolicy::degenerate). The point isn't checked
///    against the other segment's endpoints; if you care, the policy can
///    check it with a [`RobustRatio`].
/// 4. If the segments aren't collinear, they cross and we compute where.
/// 5. Otherwise, we project the segments onto their dominant axis and check
///    whether they overlap.
pub fn relate<T, R, P>(
    a: &Segment<T>,
    b: &Segment<T>,
    robust_a: &Segment<R>,
    robust_b: &Segment<R>,
    policy: &P,
) -> P::Output
where
    T: Coord,
    R: Robust,
    P: RelatePolicy<T, R::Wide>,
{
    let a_is_point = robust_a.is_degenerate();
    let b_is_point = robust_b.is_degenerate();

    if a_is_point && b_is_point {
        return if robust_a.start == robust_b.start {
            policy.degenerate(a, true)
        } else {
            policy.disjoint()
        };
    }

    let mut sides = SideInfo::compute(
        &robust_a.start,
        &robust_a.end,
        &robust_b.start,
        &robust_b.end,
    );

    if sides.is_separated() {
        return policy.disjoint();
    }

    if a_is_point {
        return policy.degenerate(a, true);
    }
    if b_is_point {
        return policy.degenerate(b, false);
    }

    let (robust_dx_a, robust_dy_a) = robust_a.wide_delta();
    let (robust_dx_b, robust_dy_b) = robust_b.wide_delta();

    if !sides.is_collinear() {
        let dx_a = a.dx();
        let dy_a = a.dy();
        let dx_b = b.dx();
        let dy_b = b.dy();
        let wx = a.start.x - b.start.x;
        let wy = a.start.y - b.start.y;
        let (d, da) = cramers_rule(
            dx_a.promote(),
            dy_a.promote(),
            dx_b.promote(),
            dy_b.promote(),
            wx.promote(),
            wy.promote(),
        );

        let robust_wx = robust_a.start.x.widen() - robust_b.start.x.widen();
        let robust_wy = robust_a.start.y.widen() - robust_b.start.y.widen();
        let (robust_da0, robust_da) = cramers_rule(
            robust_dx_a.clone(),
            robust_dy_a.clone(),
            robust_dx_b.clone(),
            robust_dy_b.clone(),
            robust_wx.clone(),
            robust_wy.clone(),
        );
        let (robust_db0, robust_db) = cramers_rule(
            robust_dx_b.clone(),
            robust_dy_b.clone(),
            robust_dx_a.clone(),
            robust_dy_a.clone(),
            -robust_wx,
            -robust_wy,
        );

        if robust_da0 == R::Wide::zero() {
            // The sides said we weren't collinear, but the robust determinant
            // says we're parallel. With exact coordinates this can't happen.
            log::warn!("parallel segments classified as crossing: {robust_a:?} and {robust_b:?}");
            sides.make_collinear();
        } else {
            let r = if d == <T::Promoted as Coord>::zero() {
                log::warn!("zero determinant for crossing segments {a:?} and {b:?}");
                <T::Promoted as Coord>::zero()
            } else {
                da / d
            };

            let info = IntersectionInfo {
                dx_a,
                dy_a,
                dx_b,
                dy_b,
                r: clamp_ratio(r),
                robust_ra: RobustRatio::new(robust_da, robust_da0),
                robust_rb: RobustRatio::new(robust_db, robust_db0),
            };

            #[cfg(feature = "slow-asserts")]
            debug_assert!(
                info.robust_ra.is_on_segment() && info.robust_rb.is_on_segment(),
                "crossing {info:?} is off the segments {robust_a:?}, {robust_b:?}"
            );

            return policy.segments_cross(&sides, &info, a, b);
        }
    }

    debug_assert!(sides.is_collinear());
    let axis = Axis::dominant(&robust_dx_a, &robust_dy_a, &robust_dx_b, &robust_dy_b);
    let outcome = relate_collinear(
        robust_a.start.coord(axis).widen(),
        robust_a.end.coord(axis).widen(),
        robust_b.start.coord(axis).widen(),
        robust_b.end.coord(axis).widen(),
    );
    match outcome {
        CollinearOutcome::Disjoint => policy.disjoint(),
        CollinearOutcome::Overlap(ratios) => policy.segments_collinear(a, b, &ratios),
    }
}
