#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use segrelate::policy::{Classify, Points};
use segrelate::Relation;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(a) = segrelate::arbitrary::segment(&mut u) else {
        return;
    };
    let Ok(b) = segrelate::arbitrary::another_segment(&mut u, &a) else {
        return;
    };

    let forward = segrelate::relate_exact(&a, &b, &Classify).unwrap();
    let backward = segrelate::relate_exact(&b, &a, &Classify).unwrap();
    assert_eq!(forward.kind(), backward.kind(), "{a:?} {b:?}");

    match (&forward, &backward) {
        (Relation::Cross { sides: fs, info: fi }, Relation::Cross { sides: bs, info: bi }) => {
            assert_eq!(fs.reversed(), *bs);
            assert!((0.0..=1.0).contains(&fi.r));
            assert!(fi.robust_ra.is_on_segment() && fi.robust_rb.is_on_segment());
            assert_eq!(fi.robust_ra, bi.robust_rb);
            assert_eq!(fi.robust_rb, bi.robust_ra);
        }
        (Relation::Collinear(fc), Relation::Collinear(bc)) => {
            assert_eq!(&fc.reversed(), bc);
        }
        _ => {}
    }

    let points = segrelate::relate_exact(&a, &b, &Points).unwrap();
    assert_eq!(points.is_empty(), !forward.intersects());
});
