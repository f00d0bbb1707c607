use tsprep_core::{
    Estimator, LargeUncConfig, OutlierConfig, OutlierMethod, UncThreshold, combine_masks,
    count_flagged, mask_largeunc, mask_outliers,
};
use tsprep_demos::common::{demo_series, init_tracing, print_mask};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let f = demo_series();
    println!("{} points, outlier injected at 37, bad uncertainty at 121\n", f.len());

    // Uncertainty screening against the mean and the median.
    let by_mean = mask_largeunc(&f.uncertainties, &LargeUncConfig::default())?;
    print_mask("unc > 3 x mean", &by_mean);
    let by_median = mask_largeunc(
        &f.uncertainties,
        &LargeUncConfig {
            threshold: UncThreshold::MedianMultiple(5.0),
        },
    )?;
    print_mask("unc > 5 x median", &by_median);

    // Outliers: smoothed residuals, global robust z-score, and a sliding window.
    let methods = [
        ("smoothed (w=5)", OutlierMethod::Smoothed { window_length: 5 }),
        (
            "global MAD",
            OutlierMethod::Global {
                estimator: Estimator::MedianMad,
            },
        ),
        (
            "window MAD",
            OutlierMethod::Window {
                half_width: 2.0,
                estimator: Estimator::MedianMad,
            },
        ),
    ];
    let mut masks = vec![by_mean];
    for (label, method) in methods {
        let cfg = OutlierConfig {
            method,
            threshold: 5.0,
        };
        let mask = mask_outliers(Some(f.times.as_slice()), &f.values, &cfg)?;
        print_mask(label, &mask);
        masks.push(mask);
    }

    let views: Vec<&[bool]> = masks.iter().map(Vec::as_slice).collect();
    let combined = combine_masks(&views)?;
    println!(
        "\n{} of {} points rejected by any test",
        count_flagged(&combined),
        combined.len()
    );

    Ok(())
}
