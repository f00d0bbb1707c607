use tsprep_core::{
    PrepConfig, Series, bin_series, combine_masks, count_flagged, mask_largeunc, mask_outliers,
    split_series,
};
use tsprep_demos::common::{demo_series, init_tracing};

const CONFIG: &str = r#"{
    "large_unc": { "threshold": { "MedianMultiple": 4.0 } },
    "outliers": {
        "method": { "Window": { "half_width": 2.0, "estimator": "MedianMad" } },
        "threshold": 5.0
    },
    "binning": {
        "width": { "Interval": 1.5 },
        "weighting": "InverseVariance",
        "keep_isolated": false
    },
    "split": { "gap": 5.0 }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cfg: PrepConfig = serde_json::from_str(CONFIG)?;
    cfg.validate()?;

    let f = demo_series();
    let unc = mask_largeunc(&f.uncertainties, &cfg.large_unc)?;
    let out = mask_outliers(Some(f.times.as_slice()), &f.values, &cfg.outliers)?;
    let mask = combine_masks(&[unc.as_slice(), out.as_slice()])?;
    println!("rejected {} of {} points", count_flagged(&mask), mask.len());

    let series = Series::with_uncertainties(&f.times, &f.values, &f.uncertainties)?;
    let kept = series.apply_mask(&mask)?;
    let kept = kept.as_series()?;

    for (i, segment) in split_series(&kept, &cfg.split)?.iter().enumerate() {
        let binned = bin_series(segment, &cfg.binning)?;
        let points: usize = binned.iter().map(|b| b.count).sum();
        println!(
            "segment {i}: {} points -> {} bins ({} points binned)",
            segment.len(),
            binned.len(),
            points
        );
    }

    Ok(())
}
