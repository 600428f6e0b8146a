//! Which side of a segment a point is on.

use crate::geom::Point;
use crate::num::Robust;

/// Describes on which side of a directed line a point lies.
///
/// "Left" and "right" assume that the `y` axis points up, so that a point is
/// to the left of a line if it makes a counter-clockwise turn with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Side {
    /// The point is to the right of the line.
    Right,
    /// The point lies exactly on the line.
    On,
    /// The point is to the left of the line.
    Left,
}

impl Side {
    /// Classifies the sign of a determinant.
    pub(crate) fn from_sign<W: Robust>(det: &W) -> Side {
        match det.cmp(&W::zero()) {
            std::cmp::Ordering::Less => Side::Right,
            std::cmp::Ordering::Equal => Side::On,
            std::cmp::Ordering::Greater => Side::Left,
        }
    }

    /// Returns `-1`, `0` or `1`.
    pub(crate) fn signum(self) -> i8 {
        match self {
            Side::Right => -1,
            Side::On => 0,
            Side::Left => 1,
        }
    }

    /// Is this `Side::On`?
    pub fn is_on(self) -> bool {
        self == Side::On
    }
}

/// Which side of the directed line through `start` and `end` is `p` on?
///
/// This computes the sign of the determinant of `end - start` and
/// `p - start` in the wide type of `R`, so for the exact coordinate types
/// the answer is exact.
pub fn side<R: Robust>(start: &Point<R>, end: &Point<R>, p: &Point<R>) -> Side {
    let sx = start.x.widen();
    let sy = start.y.widen();
    let dx = end.x.widen() - sx.clone();
    let dy = end.y.widen() - sy.clone();
    let px = p.x.widen() - sx;
    let py = p.y.widen() - sy;
    Side::from_sign(&(dx * py - dy * px))
}

/// For each of two segments, the sides of its endpoints relative to the other segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SideInfo {
    // sides[0] are the endpoints of a, relative to b. sides[1] are the
    // endpoints of b, relative to a.
    sides: [[Side; 2]; 2],
}

impl SideInfo {
    /// Creates a new `SideInfo`.
    ///
    /// `a` holds the sides of the first segment's endpoints relative to the
    /// second segment, and `b` holds the sides of the second segment's
    /// endpoints relative to the first.
    pub fn new(a: [Side; 2], b: [Side; 2]) -> Self {
        SideInfo { sides: [a, b] }
    }

    /// Computes all four sides for the segments `a0 -- a1` and `b0 -- b1`.
    pub fn compute<R: Robust>(
        a0: &Point<R>,
        a1: &Point<R>,
        b0: &Point<R>,
        b1: &Point<R>,
    ) -> Self {
        SideInfo::new(
            [side(b0, b1, a0), side(b0, b1, a1)],
            [side(a0, a1, b0), side(a0, a1, b1)],
        )
    }

    /// The sides of the first segment's endpoints, relative to the second segment.
    pub fn a(&self) -> [Side; 2] {
        self.sides[0]
    }

    /// The sides of the second segment's endpoints, relative to the first segment.
    pub fn b(&self) -> [Side; 2] {
        self.sides[1]
    }

    fn same(&self, which: usize) -> bool {
        let [s0, s1] = self.sides[which];
        s0 == s1 && !s0.is_on()
    }

    fn zeros(&self, which: usize) -> usize {
        self.sides[which].iter().filter(|s| s.is_on()).count()
    }

    /// Are both endpoints of the first segment strictly on the same side of the second?
    pub fn same_side_a(&self) -> bool {
        self.same(0)
    }

    /// Are both endpoints of the second segment strictly on the same side of the first?
    pub fn same_side_b(&self) -> bool {
        self.same(1)
    }

    /// Is one of the segments entirely on one side of the other?
    ///
    /// If so, the segments don't intersect.
    pub fn is_separated(&self) -> bool {
        self.same_side_a() || self.same_side_b()
    }

    /// Are all four points on the same line?
    pub fn is_collinear(&self) -> bool {
        self.sides.iter().flatten().all(|s| s.is_on())
    }

    /// Do the segments cross at a point that is interior to both of them?
    pub fn is_crossing(&self) -> bool {
        let [a0, a1] = self.a();
        let [b0, b1] = self.b();
        a0.signum() * a1.signum() == -1 && b0.signum() * b1.signum() == -1
    }

    /// Does exactly one endpoint (of either segment) lie on the other segment's line?
    ///
    /// For intersecting segments, this means that one segment ends in the
    /// interior of the other one: they make a "T".
    pub fn is_one_touching(&self) -> bool {
        self.zero_count() == 1
    }

    /// Do the segments share an endpoint, without being collinear?
    ///
    /// This is the case when each segment has exactly one endpoint on the
    /// other segment's line.
    pub fn is_meeting(&self) -> bool {
        self.zeros(0) == 1 && self.zeros(1) == 1
    }

    // The number of endpoints that lie on the other segment's line.
    pub(crate) fn zero_count(&self) -> usize {
        self.zeros(0) + self.zeros(1)
    }

    /// The side info we'd get by swapping the two segments.
    pub fn reversed(&self) -> SideInfo {
        SideInfo::new(self.b(), self.a())
    }

    /// Forces everything to be collinear.
    pub(crate) fn make_collinear(&mut self) {
        self.sides = [[Side::On; 2]; 2];
    }
}

#[cfg(test)]
mod tests {
    use malachite::Rational;
    use proptest::prelude::*;

    use super::*;
    use crate::num::tests::Reasonable;

    fn p(x: i64, y: i64) -> Point<i64> {
        Point::new(x, y)
    }

    #[test]
    fn left_right_on() {
        let a = p(0, 0);
        let b = p(10, 0);
        assert_eq!(side(&a, &b, &p(5, 1)), Side::Left);
        assert_eq!(side(&a, &b, &p(5, -1)), Side::Right);
        assert_eq!(side(&a, &b, &p(20, 0)), Side::On);
        assert_eq!(side(&a, &b, &p(-20, 0)), Side::On);
    }

    #[test]
    fn huge_coordinates() {
        let big = 1i64 << 61;
        let a = p(-big, -big);
        let b = p(big, big);
        assert_eq!(side(&a, &b, &p(big - 1, big)), Side::Left);
        assert_eq!(side(&a, &b, &p(big, big - 1)), Side::Right);
        assert_eq!(side(&a, &b, &p(0, 0)), Side::On);
    }

    #[test]
    fn exact_near_collinear() {
        // One ulp above the diagonal. The exact answer is "left".
        let half = 0.5f64;
        let above = half + f64::EPSILON / 2.0;
        let q = |x: f64, y: f64| Point::new(x, y).to_exact().unwrap();
        let a = q(12.0, 12.0);
        let b = q(24.0, 24.0);
        assert_eq!(side::<Rational>(&a, &b, &q(half, above)), Side::Left);
        assert_eq!(side::<Rational>(&a, &b, &q(above, half)), Side::Right);
        assert_eq!(side::<Rational>(&a, &b, &q(half, half)), Side::On);
    }

    #[test]
    fn side_info_predicates() {
        let crossing = SideInfo::new([Side::Left, Side::Right], [Side::Right, Side::Left]);
        assert!(crossing.is_crossing());
        assert!(!crossing.is_separated());
        assert!(!crossing.is_collinear());
        assert_eq!(crossing.zero_count(), 0);

        let tee = SideInfo::new([Side::On, Side::Right], [Side::Right, Side::Left]);
        assert!(tee.is_one_touching());
        assert!(!tee.is_crossing());
        assert!(!tee.is_meeting());

        let meeting = SideInfo::new([Side::On, Side::Right], [Side::On, Side::Left]);
        assert!(meeting.is_meeting());
        assert_eq!(meeting.reversed().a(), [Side::On, Side::Left]);

        let apart = SideInfo::new([Side::Left, Side::Left], [Side::Right, Side::Left]);
        assert!(apart.same_side_a());
        assert!(!apart.same_side_b());
        assert!(apart.is_separated());

        let mut forced = crossing;
        forced.make_collinear();
        assert!(forced.is_collinear());
    }

    proptest! {
        #[test]
        fn flipping_the_line_flips_the_side(
            a in Point::<i64>::reasonable(),
            b in Point::<i64>::reasonable(),
            q in Point::<i64>::reasonable(),
        ) {
            prop_assert_eq!(side(&a, &b, &q).signum(), -side(&b, &a, &q).signum());
        }

        #[test]
        fn side_is_translation_invariant(
            a in Point::<i64>::reasonable(),
            b in Point::<i64>::reasonable(),
            q in Point::<i64>::reasonable(),
            (tx, ty) in <(i64, i64)>::reasonable(),
        ) {
            let t = |pt: Point<i64>| p(pt.x + tx, pt.y + ty);
            prop_assert_eq!(side(&a, &b, &q), side(&t(a), &t(b), &t(q)));
        }
    }
}
