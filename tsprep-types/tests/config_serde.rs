use tsprep_types::{
    BinWidth, BinningConfig, Estimator, OutlierConfig, OutlierMethod, PrepConfig, SplitConfig,
    UncThreshold, Weighting,
};

#[test]
fn outlier_config_roundtrip() {
    let cfg = OutlierConfig {
        method: OutlierMethod::Window {
            half_width: 2.5,
            estimator: Estimator::MeanStd,
        },
        threshold: 4.0,
    };

    let json = serde_json::to_string(&cfg).expect("serialize outlier config");
    let de: OutlierConfig = serde_json::from_str(&json).expect("deserialize outlier config");

    assert_eq!(de, cfg);
}

#[test]
fn binning_config_roundtrip() {
    let cfg = BinningConfig {
        width: BinWidth::Count(12),
        weighting: Weighting::InverseVariance,
        keep_isolated: true,
    };

    let json = serde_json::to_string(&cfg).expect("serialize binning config");
    let de: BinningConfig = serde_json::from_str(&json).expect("deserialize binning config");

    assert_eq!(de.width, BinWidth::Count(12));
    assert!(matches!(de.weighting, Weighting::InverseVariance));
    assert!(de.keep_isolated);
}

#[test]
fn prep_config_fills_missing_sections_with_defaults() {
    let json = r#"{ "split": { "gap": 3.0 } }"#;
    let de: PrepConfig = serde_json::from_str(json).expect("deserialize partial config");

    assert_eq!(de.split, SplitConfig { gap: 3.0 });
    assert_eq!(de.large_unc.threshold, UncThreshold::MeanMultiple(3.0));
    assert_eq!(de.outliers, OutlierConfig::default());
    assert_eq!(de.binning, BinningConfig::default());
    assert!(de.validate().is_ok());
}

fn method_name(method: OutlierMethod) -> &'static str {
    match method {
        OutlierMethod::Smoothed { .. } => "smoothed",
        OutlierMethod::Global { .. } => "global",
        OutlierMethod::Window { .. } => "window",
    }
}

#[test]
fn algorithm_selectors_are_closed_enums() {
    // Exhaustive matches without a wildcard only compile for enums that are
    // not `#[non_exhaustive]`.
    let threshold = |t: UncThreshold| match t {
        UncThreshold::MeanMultiple(k)
        | UncThreshold::MedianMultiple(k)
        | UncThreshold::Absolute(k) => k,
    };
    let estimator = |e: Estimator| match e {
        Estimator::MeanStd => "mean",
        Estimator::MedianMad => "median",
    };

    assert_eq!(threshold(UncThreshold::default()), 3.0);
    assert_eq!(estimator(Estimator::default()), "median");
    assert_eq!(method_name(OutlierMethod::default()), "smoothed");
}
