use core::ops::Range;

use serde::{Deserialize, Serialize};
use tsprep_types::{BinWidth, BinningConfig, Weighting};

use crate::TsPrepError;
use crate::series::{Series, ensure_ascending};
use crate::stats;

/// One aggregated bin produced by [`bin_series`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedPoint {
    /// Mean timestamp of the contributing points.
    pub time: f64,
    /// Aggregated value.
    pub value: f64,
    /// Propagated uncertainty; `None` for a single point without uncertainty.
    pub uncertainty: Option<f64>,
    /// Number of contributing points.
    pub count: usize,
    /// Indices of the contributing points in the input series.
    pub range: Range<usize>,
}

/// Points-per-bin statistics for a binning result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinningSummary {
    /// Number of bins.
    pub bins: usize,
    /// Fewest points in a bin.
    pub min: usize,
    /// Median points per bin.
    pub median: f64,
    /// Mean points per bin.
    pub mean: f64,
    /// Most points in a bin.
    pub max: usize,
}

/// Summarize how many points ended up in each bin. Returns `None` for no bins.
#[must_use]
pub fn summarize_bins(bins: &[Range<usize>]) -> Option<BinningSummary> {
    let counts: Vec<f64> = bins.iter().map(|b| b.len() as f64).collect();
    Some(BinningSummary {
        bins: bins.len(),
        min: bins.iter().map(ExactSizeIterator::len).min()?,
        median: stats::median(&counts)?,
        mean: stats::mean(&counts)?,
        max: bins.iter().map(ExactSizeIterator::len).max()?,
    })
}

/// Group time-sorted points into data-driven bins no wider than the bin interval.
///
/// Unlike a fixed grid, the bins follow the sampling: among all runs of
/// points that fit into one interval, the run whose timestamps are most
/// tightly packed (smallest standard deviation) becomes a bin, and the points
/// before and after it are binned the same way.
///
/// - Candidate runs end at each point and reach back to the earliest point no
///   more than the interval before it (inclusive).
/// - Ties between equally packed runs go to the earlier one.
/// - Points left without a partner are dropped, or returned as single-point
///   bins if `cfg.keep_isolated` is set.
/// - `BinWidth::Count(k)` uses `(t_last - t_first) / k` as the interval.
///
/// The returned ranges are disjoint and in chronological order.
///
/// ```
/// use tsprep_core::{smart_binning, BinWidth, BinningConfig};
///
/// let t = [0.0, 0.1, 0.2, 5.0, 5.1, 9.0];
/// let cfg = BinningConfig { width: BinWidth::Interval(1.0), ..BinningConfig::default() };
/// assert_eq!(smart_binning(&t, &cfg).unwrap(), vec![0..3, 3..5]);
///
/// let keep = BinningConfig { keep_isolated: true, ..cfg };
/// assert_eq!(smart_binning(&t, &keep).unwrap(), vec![0..3, 3..5, 5..6]);
/// ```
///
/// # Errors
/// - Returns `TsPrepError::InvalidArg` for an invalid width and for
///   `BinWidth::Count` on empty input.
/// - Returns `TsPrepError::InvalidData` / `TsPrepError::Unsorted` for non-finite
///   or unsorted timestamps.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tsprep::sampling",
        skip(times),
        fields(n = times.len(), width = ?cfg.width),
    )
)]
pub fn smart_binning(
    times: &[f64],
    cfg: &BinningConfig,
) -> Result<Vec<Range<usize>>, TsPrepError> {
    cfg.validate()?;
    ensure_ascending(times)?;
    let interval = resolve_interval(times, cfg.width)?;

    let mut bins = packed_bins(times, interval);
    if cfg.keep_isolated {
        bins = with_isolated(bins, times.len());
    }

    #[cfg(feature = "tracing")]
    if let Some(s) = summarize_bins(&bins) {
        tracing::debug!(
            bins = s.bins,
            min = s.min,
            median = s.median,
            mean = s.mean,
            max = s.max,
            "bins found"
        );
    }

    Ok(bins)
}

/// Bin a series with [`smart_binning`] and aggregate every bin.
///
/// - `Weighting::InverseVariance`: value `Σ(x/σ²) / Σ(1/σ²)`, uncertainty
///   `1 / sqrt(Σ 1/σ²)`. Both are evaluated with weights rescaled by the
///   smallest σ in the bin, so any positive finite σ gives a finite result.
/// - `Weighting::Uniform`: value is the mean; uncertainty is `sqrt(Σσ²) / n`
///   when the series carries uncertainties, otherwise the standard error of
///   the mean (`None` for single-point bins).
///
/// # Errors
/// - Everything [`smart_binning`] rejects.
/// - Returns `TsPrepError::InvalidData` for non-finite values, for non-finite
///   or negative uncertainties, and for zero uncertainties under inverse-variance
///   weighting.
/// - Returns `TsPrepError::InvalidArg` for inverse-variance weighting on a
///   series without uncertainties.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "tsprep::sampling", skip(series), fields(n = series.len()))
)]
pub fn bin_series(
    series: &Series<'_>,
    cfg: &BinningConfig,
) -> Result<Vec<BinnedPoint>, TsPrepError> {
    check_values(series, cfg.weighting)?;
    let bins = smart_binning(series.times(), cfg)?;
    Ok(bins
        .into_iter()
        .map(|range| aggregate(series, range, cfg.weighting))
        .collect())
}

fn resolve_interval(times: &[f64], width: BinWidth) -> Result<f64, TsPrepError> {
    match width {
        BinWidth::Interval(w) => Ok(w),
        BinWidth::Count(k) => match (times.first(), times.last()) {
            (Some(first), Some(last)) => Ok((last - first) / k as f64),
            _ => Err(TsPrepError::invalid_arg(
                "bin count is undefined for an empty series",
            )),
        },
        _ => Err(TsPrepError::invalid_arg("unsupported bin width")),
    }
}

/// Candidate runs: for each point, the points at most `interval` before it.
///
/// Runs of a single point are skipped; a run starting where the previous one
/// started replaces it.
fn candidate_runs(t: &[f64], interval: f64) -> Vec<Range<usize>> {
    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut lo = 0usize;
    for i in 0..t.len() {
        while t[i] - t[lo] > interval {
            lo += 1;
        }
        if lo == i {
            continue;
        }
        match runs.last_mut() {
            Some(last) if last.start == lo => last.end = i + 1,
            _ => runs.push(lo..i + 1),
        }
    }
    runs
}

fn packed_bins(times: &[f64], interval: f64) -> Vec<Range<usize>> {
    let mut bins = Vec::new();
    let mut pending = vec![0..times.len()];
    while let Some(span) = pending.pop() {
        let sub = &times[span.clone()];
        let best = candidate_runs(sub, interval)
            .into_iter()
            .map(|r| (stats::std_dev(&sub[r.clone()]).unwrap_or(0.0), r))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        let Some((_, run)) = best else {
            continue;
        };
        let bin = span.start + run.start..span.start + run.end;
        pending.push(span.start..bin.start);
        pending.push(bin.end..span.end);
        bins.push(bin);
    }
    bins.sort_unstable_by_key(|r| r.start);
    bins
}

fn with_isolated(bins: Vec<Range<usize>>, n: usize) -> Vec<Range<usize>> {
    let mut out = Vec::with_capacity(bins.len());
    let mut next = 0usize;
    for bin in bins {
        out.extend((next..bin.start).map(|i| i..i + 1));
        next = bin.end;
        out.push(bin);
    }
    out.extend((next..n).map(|i| i..i + 1));
    out
}

fn check_values(series: &Series<'_>, weighting: Weighting) -> Result<(), TsPrepError> {
    if let Some(i) = series.values().iter().position(|v| !v.is_finite()) {
        return Err(TsPrepError::invalid_data(format!(
            "value at index {i} is not finite"
        )));
    }
    match (series.uncertainties(), weighting) {
        (None, Weighting::InverseVariance) => Err(TsPrepError::invalid_arg(
            "inverse-variance weighting requires uncertainties",
        )),
        (Some(unc), _) => {
            let bad = |u: &f64| {
                !u.is_finite() || *u < 0.0 || (weighting == Weighting::InverseVariance && *u == 0.0)
            };
            match unc.iter().position(bad) {
                Some(i) => Err(TsPrepError::invalid_data(format!(
                    "uncertainty at index {i} is not usable for {weighting:?} weighting: {}",
                    unc[i]
                ))),
                None => Ok(()),
            }
        }
        (None, _) => Ok(()),
    }
}

fn aggregate(series: &Series<'_>, range: Range<usize>, weighting: Weighting) -> BinnedPoint {
    let part = series.slice(range.clone());
    let n = part.len();
    let nf = n as f64;
    let time = part.times().iter().sum::<f64>() / nf;

    let (value, uncertainty) = match (weighting, part.uncertainties()) {
        (Weighting::InverseVariance, Some(unc)) => {
            // Weights relative to the smallest sigma, in (0, 1].
            let scale = unc.iter().copied().fold(f64::INFINITY, f64::min);
            let (wsum, wxsum) = part
                .values()
                .iter()
                .zip(unc)
                .fold((0.0, 0.0), |(ws, wxs), (x, u)| {
                    let r = scale / u;
                    let w = r * r;
                    (ws + w, wxs + w * x)
                });
            (wxsum / wsum, Some(scale / wsum.sqrt()))
        }
        (_, Some(unc)) => {
            let mean = part.values().iter().sum::<f64>() / nf;
            let scale = unc.iter().copied().fold(0.0, f64::max);
            let spread = if scale > 0.0 {
                let sq: f64 = unc.iter().map(|u| (u / scale) * (u / scale)).sum();
                scale * sq.sqrt() / nf
            } else {
                0.0
            };
            (mean, Some(spread))
        }
        (_, None) => {
            let mean = part.values().iter().sum::<f64>() / nf;
            let sem = (n >= 2).then(|| {
                let ss: f64 = part.values().iter().map(|x| (x - mean) * (x - mean)).sum();
                (ss / (nf - 1.0)).sqrt() / nf.sqrt()
            });
            (mean, sem)
        }
    };

    BinnedPoint {
        time,
        value,
        uncertainty,
        count: n,
        range,
    }
}
