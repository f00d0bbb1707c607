use tsprep_core::{
    Estimator, LargeUncConfig, OutlierConfig, OutlierMethod, TsPrepError, UncThreshold,
    combine_masks, count_flagged, mask_largeunc, mask_outliers,
};
use tsprep_mock::{Anomaly, MockSeries, fixture};

fn flagged_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

#[test]
fn largeunc_empty_input_gives_empty_mask() {
    let mask = mask_largeunc(&[], &LargeUncConfig::default()).unwrap();
    assert!(mask.is_empty());
}

#[test]
fn largeunc_mean_multiple() {
    // mean = 0.5, limit = 1.0
    let unc = [0.2, 0.2, 0.2, 0.2, 1.7];
    let cfg = LargeUncConfig {
        threshold: UncThreshold::MeanMultiple(2.0),
    };
    assert_eq!(
        flagged_indices(&mask_largeunc(&unc, &cfg).unwrap()),
        vec![4]
    );
}

#[test]
fn largeunc_absolute_limit_is_exclusive() {
    let unc = [0.5, 1.0, 1.5];
    let cfg = LargeUncConfig {
        threshold: UncThreshold::Absolute(1.0),
    };
    assert_eq!(mask_largeunc(&unc, &cfg).unwrap(), vec![false, false, true]);
}

#[test]
fn largeunc_non_finite_is_flagged_and_ignored_for_reference() {
    let unc = [0.1, f64::NAN, 0.1, f64::INFINITY, 0.25];
    let cfg = LargeUncConfig {
        threshold: UncThreshold::MedianMultiple(2.0),
    };
    // median of finite = 0.1 -> limit 0.2
    assert_eq!(
        mask_largeunc(&unc, &cfg).unwrap(),
        vec![false, true, false, true, true]
    );
}

#[test]
fn largeunc_mean_of_huge_uncertainties_stays_finite() {
    // mean ~ 6.7e307, limit ~ 8e307
    let unc = [1e308, 1e308, 1.0];
    let cfg = LargeUncConfig {
        threshold: UncThreshold::MeanMultiple(1.2),
    };
    assert_eq!(
        mask_largeunc(&unc, &cfg).unwrap(),
        vec![true, true, false]
    );
}

#[test]
fn largeunc_negative_uncertainty_is_invalid_data() {
    let err = mask_largeunc(&[0.1, -0.1], &LargeUncConfig::default()).unwrap_err();
    assert!(matches!(err, TsPrepError::InvalidData(_)));
}

#[test]
fn largeunc_flags_injected_uncertainty() {
    let f = MockSeries::new(11)
        .points(80)
        .anomaly(17, Anomaly::LargeUncertainty(20.0))
        .build();
    let mask = mask_largeunc(&f.uncertainties, &LargeUncConfig::default()).unwrap();
    assert_eq!(flagged_indices(&mask), vec![17]);
}

#[test]
fn smoothed_outlier_finds_spike() {
    let f = fixture("spike").unwrap();
    let mask = mask_outliers(None, &f.values, &OutlierConfig::default()).unwrap();
    assert_eq!(flagged_indices(&mask), vec![4]);
}

#[test]
fn global_mean_std_finds_spike() {
    let f = fixture("spike").unwrap();
    let cfg = OutlierConfig {
        method: OutlierMethod::Global {
            estimator: Estimator::MeanStd,
        },
        threshold: 2.0,
    };
    let mask = mask_outliers(None, &f.values, &cfg).unwrap();
    assert_eq!(flagged_indices(&mask), vec![4]);
}

#[test]
fn windowed_median_mad_finds_spike() {
    let f = fixture("spike").unwrap();
    let cfg = OutlierConfig {
        method: OutlierMethod::Window {
            half_width: 2.0,
            estimator: Estimator::MedianMad,
        },
        threshold: 3.0,
    };
    let mask = mask_outliers(Some(f.times.as_slice()), &f.values, &cfg).unwrap();
    assert_eq!(flagged_indices(&mask), vec![4]);
}

#[test]
fn windowed_method_requires_timestamps() {
    let cfg = OutlierConfig {
        method: OutlierMethod::Window {
            half_width: 1.0,
            estimator: Estimator::MeanStd,
        },
        threshold: 3.0,
    };
    let err = mask_outliers(None, &[1.0, 2.0, 3.0], &cfg).unwrap_err();
    assert!(matches!(err, TsPrepError::InvalidArg(_)));
}

#[test]
fn constant_series_flags_nothing() {
    let f = fixture("constant").unwrap();
    let methods = [
        OutlierMethod::Smoothed { window_length: 3 },
        OutlierMethod::Smoothed { window_length: 5 },
        OutlierMethod::Global {
            estimator: Estimator::MeanStd,
        },
        OutlierMethod::Global {
            estimator: Estimator::MedianMad,
        },
        OutlierMethod::Window {
            half_width: 1.5,
            estimator: Estimator::MeanStd,
        },
    ];
    for method in methods {
        let cfg = OutlierConfig {
            method,
            threshold: 0.0,
        };
        let mask = mask_outliers(Some(f.times.as_slice()), &f.values, &cfg).unwrap();
        assert_eq!(mask.len(), f.len());
        assert_eq!(count_flagged(&mask), 0, "{method:?}");
    }
}

#[test]
fn fewer_than_two_points_flags_nothing() {
    let cfg = OutlierConfig::default();
    assert!(mask_outliers(None, &[], &cfg).unwrap().is_empty());
    assert_eq!(mask_outliers(None, &[42.0], &cfg).unwrap(), vec![false]);
    assert_eq!(
        mask_outliers(None, &[42.0, f64::NAN], &cfg).unwrap(),
        vec![false, true]
    );
}

#[test]
fn non_finite_values_are_flagged_and_skipped() {
    let values = [1.0, 1.1, f64::NAN, 0.9, 1.0, 9.0, 1.0, f64::NEG_INFINITY, 1.1, 0.9];
    let cfg = OutlierConfig {
        method: OutlierMethod::Global {
            estimator: Estimator::MedianMad,
        },
        threshold: 5.0,
    };
    let mask = mask_outliers(None, &values, &cfg).unwrap();
    assert_eq!(flagged_indices(&mask), vec![2, 5, 7]);
}

#[test]
fn smoothing_window_longer_than_series_is_rejected() {
    let cfg = OutlierConfig {
        method: OutlierMethod::Smoothed { window_length: 7 },
        threshold: 3.0,
    };
    let err = mask_outliers(None, &[1.0, 2.0, 3.0], &cfg).unwrap_err();
    assert!(matches!(err, TsPrepError::InvalidArg(_)));
}

#[test]
fn too_long_smoothing_window_is_rejected_for_constant_series_too() {
    let cfg = OutlierConfig {
        method: OutlierMethod::Smoothed { window_length: 7 },
        threshold: 3.0,
    };
    let err = mask_outliers(None, &[2.0, 2.0, 2.0], &cfg).unwrap_err();
    assert!(matches!(err, TsPrepError::InvalidArg(_)));

    // fewer than two finite values still short-circuits
    assert_eq!(
        mask_outliers(None, &[2.0, f64::NAN], &cfg).unwrap(),
        vec![false, true]
    );
}

#[test]
fn mismatched_timestamps_are_rejected() {
    let err = mask_outliers(Some(&[0.0, 1.0][..]), &[1.0, 2.0, 3.0], &OutlierConfig::default())
        .unwrap_err();
    assert!(matches!(err, TsPrepError::LengthMismatch { .. }));
}

#[test]
fn unsorted_timestamps_are_rejected() {
    let err = mask_outliers(
        Some(&[0.0, 2.0, 1.0][..]),
        &[1.0, 2.0, 3.0],
        &OutlierConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, TsPrepError::Unsorted { index: 2 });
}

#[test]
fn masks_combine_with_or() {
    let a = [true, false, false];
    let b = [false, false, true];
    assert_eq!(combine_masks(&[&a[..], &b[..]]).unwrap(), vec![true, false, true]);
    assert!(combine_masks(&[]).unwrap().is_empty());
    assert!(combine_masks(&[&a[..], &[true][..]]).is_err());
}
