use core::ops::Range;

use tsprep_types::SplitConfig;

use crate::TsPrepError;
use crate::series::{Series, ensure_ascending};

/// Split time-sorted timestamps into contiguous segments at large gaps.
///
/// A new segment starts at index `i` whenever `t[i] - t[i - 1] > gap`. The
/// returned ranges partition `0..times.len()` in order.
///
/// - Empty input yields no segments; a single point yields `[0..1]`.
/// - `gap == 0` starts a new segment at every distinct timestamp, keeping
///   duplicates together.
///
/// ```
/// use tsprep_core::split_data;
///
/// let t = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
/// assert_eq!(split_data(&t, 3.0).unwrap(), vec![0..3, 3..6]);
/// ```
///
/// # Errors
/// - Returns `TsPrepError::InvalidArg` if `gap` is negative or non-finite.
/// - Returns `TsPrepError::InvalidData` / `TsPrepError::Unsorted` for non-finite
///   or unsorted timestamps.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "tsprep::sampling", skip(times), fields(n = times.len()))
)]
pub fn split_data(times: &[f64], gap: f64) -> Result<Vec<Range<usize>>, TsPrepError> {
    SplitConfig { gap }.validate()?;
    ensure_ascending(times)?;
    if times.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    for (i, w) in times.windows(2).enumerate() {
        if w[1] - w[0] > gap {
            segments.push(start..i + 1);
            start = i + 1;
        }
    }
    segments.push(start..times.len());

    #[cfg(feature = "tracing")]
    tracing::debug!(segments = segments.len(), "series split");

    Ok(segments)
}

/// Split a series into borrowed sub-series at gaps larger than `cfg.gap`.
///
/// # Errors
/// Returns `TsPrepError::InvalidArg` for an invalid gap.
pub fn split_series<'a>(
    series: &Series<'a>,
    cfg: &SplitConfig,
) -> Result<Vec<Series<'a>>, TsPrepError> {
    let segments = split_data(series.times(), cfg.gap)?;
    Ok(segments.into_iter().map(|r| series.slice(r)).collect())
}
