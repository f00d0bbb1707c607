use tracing_subscriber::fmt::format::FmtSpan;
use tsprep_mock::{Anomaly, Fixture, MockSeries};

/// Install a human-friendly subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=info,tsprep=debug`. Calling it twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();
}

/// Irregularly sampled light-curve-like series used by every demo.
///
/// Two observing runs separated by a long gap, one value outlier and one
/// point with a badly estimated uncertainty.
#[must_use]
pub fn demo_series() -> Fixture {
    MockSeries::new(42)
        .points(160)
        .cadence(0.25)
        .jitter(0.4)
        .signal(12.0, 0.8, 9.0)
        .noise(0.05)
        .anomaly(37, Anomaly::Outlier(2.5))
        .anomaly(90, Anomaly::Gap(25.0))
        .anomaly(121, Anomaly::LargeUncertainty(15.0))
        .build()
}

/// Print the flagged indices of a mask on one line.
pub fn print_mask(label: &str, mask: &[bool]) {
    let idx: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect();
    println!("{label:<18} {:>3} flagged {idx:?}", idx.len());
}
