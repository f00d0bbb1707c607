use tsprep_core::{
    BinningConfig, LargeUncConfig, OutlierConfig, Series, SplitConfig, bin_series, combine_masks,
    mask_largeunc, mask_outliers, split_series,
};
use tsprep_demos::common::{demo_series, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tsprep=debug
    init_tracing();

    let f = demo_series();
    let unc = mask_largeunc(&f.uncertainties, &LargeUncConfig::default())?;
    let out = mask_outliers(Some(f.times.as_slice()), &f.values, &OutlierConfig::default())?;
    let mask = combine_masks(&[unc.as_slice(), out.as_slice()])?;

    let series = Series::with_uncertainties(&f.times, &f.values, &f.uncertainties)?;
    let clean = series.apply_mask(&mask)?;
    let clean = clean.as_series()?;

    for segment in split_series(&clean, &SplitConfig::default())? {
        let bins = bin_series(&segment, &BinningConfig::default())?;
        tracing::info!(points = segment.len(), bins = bins.len(), "segment binned");
    }

    Ok(())
}
