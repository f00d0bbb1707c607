use tsprep_core::{
    BinWidth, BinningConfig, Series, Weighting, bin_series, smart_binning, summarize_bins,
};
use tsprep_demos::common::{demo_series, init_tracing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let f = demo_series();
    let series = Series::with_uncertainties(&f.times, &f.values, &f.uncertainties)?;

    for width in [BinWidth::Interval(1.0), BinWidth::Interval(2.5), BinWidth::Count(20)] {
        let cfg = BinningConfig {
            width,
            ..BinningConfig::default()
        };
        let bins = smart_binning(series.times(), &cfg)?;
        if let Some(s) = summarize_bins(&bins) {
            println!(
                "{width:?}: {} bins, points per bin min {} / median {:.1} / mean {:.2} / max {}",
                s.bins, s.min, s.median, s.mean, s.max
            );
        }
    }

    let cfg = BinningConfig {
        width: BinWidth::Interval(1.0),
        weighting: Weighting::InverseVariance,
        keep_isolated: true,
    };
    let binned = bin_series(&series, &cfg)?;

    println!("\n## First inverse-variance weighted bins:");
    println!("{:<10} | {:<10} | {:<10} | {:<5}", "Time", "Value", "Sigma", "N");
    println!("{:-<11}|{:-<12}|{:-<12}|{:-<6}", "", "", "", "");
    for b in binned.iter().take(8) {
        println!(
            "{:<10.3} | {:<10.4} | {:<10.4} | {:<5}",
            b.time,
            b.value,
            b.uncertainty.unwrap_or(f64::NAN),
            b.count
        );
    }

    Ok(())
}
