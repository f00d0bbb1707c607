use proptest::prelude::*;
use tsprep_core::split_data;

fn arb_times() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![4 => 0.0f64..2.0, 1 => 2.0f64..50.0], 0..200).prop_map(
        |steps| {
            let mut t = -10.0;
            steps
                .into_iter()
                .map(|dt| {
                    t += dt;
                    t
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn segments_partition_the_input(times in arb_times(), gap in 0.0f64..10.0) {
        let segments = split_data(&times, gap).unwrap();
        let mut next = 0usize;
        for seg in &segments {
            prop_assert_eq!(seg.start, next);
            prop_assert!(!seg.is_empty());
            next = seg.end;
        }
        prop_assert_eq!(next, times.len());
    }

    #[test]
    fn gaps_separate_segments_and_only_gaps(times in arb_times(), gap in 0.0f64..10.0) {
        let segments = split_data(&times, gap).unwrap();
        for seg in &segments {
            for w in times[seg.clone()].windows(2) {
                prop_assert!(w[1] - w[0] <= gap);
            }
        }
        for pair in segments.windows(2) {
            let boundary = pair[1].start;
            prop_assert!(times[boundary] - times[boundary - 1] > gap);
        }
    }
}
