use assert_matches::assert_matches;
use proptest::prelude::*;

use segrelate::policy::{Classify, Intersects, Points, RelationKind};
use segrelate::{
    relate, relate_exact, relation, CollinearInfo, IntersectionInfo, Point, RelatePolicy, Relation,
    Robust, RobustRatio, Segment, SideInfo,
};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment<f64> {
    Segment::new((x0, y0), (x1, y1))
}

fn segment() -> impl Strategy<Value = Segment<f64>> {
    // Small integers, so that touching and overlapping happen a lot.
    let coord = (-6i8..=6).prop_map(f64::from);
    (coord.clone(), coord.clone(), coord.clone(), coord)
        .prop_map(|(x0, y0, x1, y1)| seg(x0, y0, x1, y1))
}

fn ratio<W: Robust>(n: i32, d: i32, f: impl Fn(i32) -> W) -> RobustRatio<W> {
    RobustRatio::new(f(n), f(d))
}

#[test]
fn simple_crossing() {
    let out = relation(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0)).unwrap();
    let Relation::Cross { info, .. } = out else {
        panic!("expected a crossing, got {out:?}");
    };
    assert_eq!(info.r, 0.5);
    let half = ratio(1, 2, malachite::Rational::from);
    assert_eq!(info.robust_ra, half);
    assert_eq!(info.robust_rb, half);
}

#[test]
fn collinear_overlap() {
    let out = relation(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 0.0, 15.0, 0.0)).unwrap();
    let Relation::Collinear(info) = out else {
        panic!("expected collinear, got {out:?}");
    };
    assert_eq!(info.rb_from, ratio(1, 2, malachite::Rational::from));
    assert!(info.rb_to.is_after_end());
    assert_eq!(info.ra_to, ratio(1, 2, malachite::Rational::from));
}

#[test]
fn collinear_disjoint() {
    assert_matches!(
        relation(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, 0.0, 3.0, 0.0)),
        Ok(Relation::Disjoint)
    );
}

#[test]
fn degenerate_off_to_the_side() {
    // A point strictly to one side is disjoint, not degenerate.
    assert_matches!(
        relation(&seg(0.0, 0.0, 10.0, 0.0), &seg(3.0, 1e-300, 3.0, 1e-300)),
        Ok(Relation::Disjoint)
    );
    assert_matches!(
        relation(&seg(3.0, 0.0, 3.0, 0.0), &seg(0.0, 0.0, 10.0, 0.0)),
        Ok(Relation::Degenerate {
            a_degenerate: true,
            ..
        })
    );
}

#[test]
fn near_parallel_with_large_coordinates() {
    // Huge coordinates and a shallow crossing angle.
    let big = (1u64 << 60) as f64;
    let a = seg(0.0, 0.0, big, big + 512.0);
    let b = seg(0.0, 512.0, big, big - 512.0);
    let out = relation(&a, &b).unwrap();
    let Relation::Cross { info, .. } = out else {
        panic!("expected a crossing, got {out:?}");
    };
    assert!((0.0..=1.0).contains(&info.r));
    assert!(info.robust_ra.is_in_segment());
    assert_eq!(info.robust_ra, info.robust_rb);
}

#[test]
fn integer_robust_coordinates() {
    let robust_a: Segment<i32> = Segment::new((0, 0), (6, 0));
    let robust_b: Segment<i32> = Segment::new((3, -1), (3, 5));
    let a = robust_a.map(f64::from);
    let b = robust_b.map(f64::from);
    assert!(relate(&a, &b, &robust_a, &robust_b, &Intersects));
    let points = relate(&a, &b, &robust_a, &robust_b, &Points);
    assert_eq!(points.points(), &[Point::new(3.0, 0.0)]);
}

// Numbers the four outcomes.
struct CountRatios;

impl<W: Robust> RelatePolicy<f64, W> for CountRatios {
    type Output = usize;

    fn disjoint(&self) -> usize {
        0
    }

    fn degenerate(&self, _segment: &Segment<f64>, _a_degenerate: bool) -> usize {
        1
    }

    fn segments_cross(
        &self,
        _sides: &SideInfo,
        _info: &IntersectionInfo<f64, W>,
        _a: &Segment<f64>,
        _b: &Segment<f64>,
    ) -> usize {
        3
    }

    fn segments_collinear(
        &self,
        _a: &Segment<f64>,
        _b: &Segment<f64>,
        _ratios: &CollinearInfo<W>,
    ) -> usize {
        4
    }
}

#[test]
fn custom_policy() {
    let a = seg(0.0, 0.0, 4.0, 0.0);
    let count = |b: Segment<f64>| relate_exact(&a, &b, &CountRatios).unwrap();
    assert_eq!(count(seg(0.0, 1.0, 4.0, 1.0)), 0);
    assert_eq!(count(seg(1.0, 0.0, 1.0, 0.0)), 1);
    assert_eq!(count(seg(1.0, -1.0, 1.0, 1.0)), 3);
    assert_eq!(count(seg(2.0, 0.0, 6.0, 0.0)), 4);
}

#[test]
fn arbitrary_pairs() {
    arbtest::arbtest(|u| {
        let mut coord = || -> arbitrary::Result<f64> {
            let exponent: i32 = u.int_in_range(-40..=40)?;
            let mantissa: i16 = u.arbitrary()?;
            Ok(f64::from(mantissa) * 2f64.powi(exponent))
        };
        let a = seg(coord()?, coord()?, coord()?, coord()?);
        let b = seg(coord()?, coord()?, coord()?, coord()?);
        let forward = relation(&a, &b).unwrap();
        let backward = relation(&b, &a).unwrap();
        assert_eq!(forward.kind(), backward.kind(), "{a:?} {b:?}");
        if let Relation::Cross { info, .. } = forward {
            assert!((0.0..=1.0).contains(&info.r));
        }
        Ok(())
    });
}

proptest! {
    #[test]
    fn symmetry(a in segment(), b in segment()) {
        let forward = relation(&a, &b).unwrap();
        let backward = relation(&b, &a).unwrap();
        prop_assert_eq!(forward.kind(), backward.kind());
        if let (Relation::Collinear(f), Relation::Collinear(b)) = (&forward, &backward) {
            prop_assert_eq!(f.reversed(), b.clone());
        }
    }

    #[test]
    fn ratio_bound(a in segment(), b in segment()) {
        if let Relation::Cross { info, .. } = relation(&a, &b).unwrap() {
            prop_assert!((0.0..=1.0).contains(&info.r));
        }
    }

    #[test]
    fn idempotence(a in segment(), b in segment()) {
        prop_assert_eq!(relation(&a, &b).unwrap(), relation(&a, &b).unwrap());
        prop_assert_eq!(
            segrelate::intersection_points(&a, &b).unwrap(),
            segrelate::intersection_points(&a, &b).unwrap()
        );
    }

    #[test]
    fn degenerate_absorption(b in segment(), t in 0u8..=8) {
        prop_assume!(!b.is_degenerate());
        let p = b.start.affine(&b.end, f64::from(t) / 8.0);
        let a = Segment { start: p, end: p };
        prop_assert_eq!(relation(&a, &b).unwrap().kind(), RelationKind::Degenerate);
    }

    #[test]
    fn disjoint_fast_path(a in segment(), b in segment()) {
        let exact_a = a.to_exact().unwrap();
        let exact_b = b.to_exact().unwrap();
        let sides = SideInfo::compute(&exact_a.start, &exact_a.end, &exact_b.start, &exact_b.end);
        if sides.same_side_b() {
            prop_assert_eq!(relation(&a, &b).unwrap().kind(), RelationKind::Disjoint);
        }
    }

    #[test]
    fn policies_agree(a in segment(), b in segment()) {
        let intersects = relate_exact(&a, &b, &Intersects).unwrap();
        let classified = relate_exact(&a, &b, &Classify).unwrap();
        let points = relate_exact(&a, &b, &Points).unwrap();
        prop_assert_eq!(intersects, classified.intersects());
        prop_assert_eq!(intersects, !points.is_empty());
        prop_assert_eq!(points.is_collinear(), classified.kind() == RelationKind::Collinear);
    }
}
