//! Overlap analysis for segments that are known to be collinear.

use crate::num::Robust;
use crate::ratio::RobustRatio;

/// Where two collinear segments sit relative to one another.
///
/// Each segment's endpoints are expressed as ratios along the other segment,
/// so `ra_from` is the position of `a`'s start point along `b` and `rb_to` is
/// the position of `b`'s end point along `a`. Both segments keep their
/// original direction, so a segment running "backwards" relative to the other
/// one gets ratios that decrease from `from` to `to`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CollinearInfo<W> {
    /// The start of `a`, along `b`.
    pub ra_from: RobustRatio<W>,
    /// The end of `a`, along `b`.
    pub ra_to: RobustRatio<W>,
    /// The start of `b`, along `a`.
    pub rb_from: RobustRatio<W>,
    /// The end of `b`, along `a`.
    pub rb_to: RobustRatio<W>,
}

impl<W: Robust> CollinearInfo<W> {
    /// The info we'd get by swapping the two segments.
    pub fn reversed(&self) -> Self {
        CollinearInfo {
            ra_from: self.rb_from.clone(),
            ra_to: self.rb_to.clone(),
            rb_from: self.ra_from.clone(),
            rb_to: self.ra_to.clone(),
        }
    }

    /// Do the segments point in opposite directions?
    pub fn is_opposite(&self) -> bool {
        self.rb_to < self.rb_from
    }

    /// Is the overlap just a single point, where one segment ends and the other begins?
    pub fn is_touching(&self) -> bool {
        // If one of b's endpoints is at an end of a and the other is beyond
        // that same end, the overlap is a single point.
        let touches_at = |end_is: fn(&RobustRatio<W>) -> bool,
                          beyond: fn(&RobustRatio<W>) -> bool| {
            (end_is(&self.rb_from) && beyond(&self.rb_to))
                || (end_is(&self.rb_to) && beyond(&self.rb_from))
        };
        touches_at(RobustRatio::is_zero, RobustRatio::is_before_start)
            || touches_at(RobustRatio::is_one, RobustRatio::is_after_end)
    }
}

impl<W: Robust> PartialEq for CollinearInfo<W> {
    fn eq(&self, other: &Self) -> bool {
        self.ra_from == other.ra_from
            && self.ra_to == other.ra_to
            && self.rb_from == other.rb_from
            && self.rb_to == other.rb_to
    }
}

/// The outcome of [`relate_collinear`].
#[derive(Clone, Debug)]
pub enum CollinearOutcome<W> {
    /// The segments don't meet.
    Disjoint,
    /// The segments overlap, possibly in just a single point.
    Overlap(CollinearInfo<W>),
}

impl<W: Robust> PartialEq for CollinearOutcome<W> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CollinearOutcome::Disjoint, CollinearOutcome::Disjoint) => true,
            (CollinearOutcome::Overlap(a), CollinearOutcome::Overlap(b)) => a == b,
            _ => false,
        }
    }
}

/// Relates two collinear segments, given their endpoints' coordinates along a common axis.
///
/// `oa1` and `oa2` are the start and end of `a`, and `ob1` and `ob2` are the
/// start and end of `b`. They're in their original order, not sorted: the
/// direction matters for the signs of the ratios.
///
/// Neither segment may be degenerate along the axis. (The engine makes sure
/// of this by choosing the axis along which the segments are longest.)
pub fn relate_collinear<W: Robust>(oa1: W, oa2: W, ob1: W, ob2: W) -> CollinearOutcome<W> {
    // Signed lengths; no absolute values, because the direction matters.
    let length_a = oa2.clone() - oa1.clone();
    let length_b = ob2.clone() - ob1.clone();
    debug_assert!(length_a != W::zero() && length_b != W::zero());

    let ra_from = RobustRatio::new(oa1.clone() - ob1.clone(), length_b.clone());
    let ra_to = RobustRatio::new(oa2 - ob1.clone(), length_b);
    let rb_from = RobustRatio::new(ob1 - oa1.clone(), length_a.clone());
    let rb_to = RobustRatio::new(ob2 - oa1, length_a);

    if (ra_from.is_before_start() && ra_to.is_before_start())
        || (ra_from.is_after_end() && ra_to.is_after_end())
    {
        return CollinearOutcome::Disjoint;
    }

    CollinearOutcome::Overlap(CollinearInfo {
        ra_from,
        ra_to,
        rb_from,
        rb_to,
    })
}
