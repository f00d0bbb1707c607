use tsprep_types::{Estimator, OutlierConfig, OutlierMethod};

use crate::TsPrepError;
use crate::series::{ensure_ascending, ensure_same_len};
use crate::stats;

/// Identify points that deviate strongly from the expected level of the series.
///
/// The expected level and the deviation scale depend on `cfg.method`:
///
/// - `Smoothed { window_length }`: the series is smoothed with a normalized
///   Hann window, mirrored at both ends without repeating the end points.
///   A point is an outlier if its absolute residual exceeds
///   `cfg.threshold` times the mean absolute residual.
/// - `Global { estimator }`: a point is an outlier if it lies more than
///   `cfg.threshold` scale units from the centre of the whole series.
/// - `Window { half_width, estimator }`: as `Global`, but centre and scale are
///   taken over the points within `half_width` time units; needs `times`.
///
/// Non-finite values are always flagged and excluded from every estimate.
/// Series with fewer than two finite values, or whose finite values are all
/// equal, flag nothing else. The mask always has `values.len()` entries.
///
/// Checks run in this order: fewer than two finite values returns early,
/// then the smoothing window is checked against the number of finite values,
/// then a constant series returns early. A window that is too long is
/// therefore rejected even when the series is constant.
///
/// ```
/// use tsprep_core::{mask_outliers, Estimator, OutlierConfig, OutlierMethod};
///
/// let values = [1.0, 1.1, 0.9, 1.0, 9.0, 1.0, 1.1, 0.9];
/// let cfg = OutlierConfig {
///     method: OutlierMethod::Global { estimator: Estimator::MedianMad },
///     threshold: 5.0,
/// };
/// let mask = mask_outliers(None, &values, &cfg).unwrap();
/// assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
/// assert!(mask[4]);
/// ```
///
/// # Errors
/// - Returns `TsPrepError::InvalidArg` for an invalid configuration, for the
///   `Window` method without timestamps, and for a smoothing window whose half
///   width is not smaller than the number of finite values.
/// - Returns `TsPrepError::LengthMismatch` if `times` and `values` differ in length.
/// - Returns `TsPrepError::InvalidData` / `TsPrepError::Unsorted` for non-finite
///   or unsorted timestamps.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tsprep::flagging",
        skip(times, values),
        fields(n = values.len(), method = ?cfg.method),
    )
)]
pub fn mask_outliers(
    times: Option<&[f64]>,
    values: &[f64],
    cfg: &OutlierConfig,
) -> Result<Vec<bool>, TsPrepError> {
    cfg.validate()?;
    if let Some(t) = times {
        ensure_same_len("timestamps", values.len(), t.len())?;
        ensure_ascending(t)?;
    }

    let finite_idx: Vec<usize> = (0..values.len())
        .filter(|&i| values[i].is_finite())
        .collect();
    let x: Vec<f64> = finite_idx.iter().map(|&i| values[i]).collect();

    let mut mask: Vec<bool> = values.iter().map(|v| !v.is_finite()).collect();

    let flags = match cfg.method {
        OutlierMethod::Window { .. } if times.is_none() => {
            return Err(TsPrepError::invalid_arg(
                "windowed outlier detection requires timestamps",
            ));
        }
        _ if x.len() < 2 => vec![false; x.len()],
        OutlierMethod::Smoothed { window_length } => {
            ensure_window_fits(window_length, x.len())?;
            if is_constant(&x) {
                vec![false; x.len()]
            } else {
                smoothed_flags(&x, window_length, cfg.threshold)
            }
        }
        _ if is_constant(&x) => vec![false; x.len()],
        OutlierMethod::Global { estimator } => global_flags(&x, estimator, cfg.threshold),
        OutlierMethod::Window {
            half_width,
            estimator,
        } => {
            let t = times.unwrap_or_default();
            let tf: Vec<f64> = finite_idx.iter().map(|&i| t[i]).collect();
            window_flags(&tf, &x, half_width, estimator, cfg.threshold)
        }
    };

    for (&i, flag) in finite_idx.iter().zip(flags) {
        mask[i] = flag;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        flagged = mask.iter().filter(|&&m| m).count(),
        "outliers flagged"
    );

    Ok(mask)
}

fn is_constant(x: &[f64]) -> bool {
    x.windows(2).all(|w| w[0] == w[1])
}

/// Hann-smoothed curve with mirrored ends.
///
/// Requires `x.len() > window_length / 2` so every mirrored index is in range.
fn hann_smooth(x: &[f64], window_length: usize) -> Vec<f64> {
    let n = x.len();
    let half = window_length / 2;
    let w = stats::hann(window_length);
    let norm: f64 = w.iter().sum();
    let last = n - 1;
    let mirror = |j: isize| -> usize {
        if j < 0 {
            j.unsigned_abs()
        } else if j.unsigned_abs() > last {
            2 * last - j.unsigned_abs()
        } else {
            j.unsigned_abs()
        }
    };

    (0..n)
        .map(|i| {
            let acc: f64 = w
                .iter()
                .enumerate()
                .map(|(k, wk)| {
                    let j = i as isize + k as isize - half as isize;
                    wk * x[mirror(j)]
                })
                .sum();
            acc / norm
        })
        .collect()
}

fn ensure_window_fits(window_length: usize, finite: usize) -> Result<(), TsPrepError> {
    if window_length / 2 >= finite {
        return Err(TsPrepError::invalid_arg(format!(
            "window_length {window_length} is too long for {finite} finite values"
        )));
    }
    Ok(())
}

fn smoothed_flags(x: &[f64], window_length: usize, threshold: f64) -> Vec<bool> {
    let smooth = hann_smooth(x, window_length);
    let residuals: Vec<f64> = x.iter().zip(&smooth).map(|(a, s)| (a - s).abs()).collect();
    let mean_res = stats::mean(&residuals).unwrap_or(0.0);
    if mean_res <= 0.0 {
        return vec![false; x.len()];
    }
    let limit = threshold * mean_res;
    residuals.iter().map(|r| *r > limit).collect()
}

fn global_flags(x: &[f64], estimator: Estimator, threshold: f64) -> Vec<bool> {
    match stats::centre_scale(x, estimator) {
        Some((centre, scale)) if scale > 0.0 => {
            let limit = threshold * scale;
            x.iter().map(|v| (v - centre).abs() > limit).collect()
        }
        _ => vec![false; x.len()],
    }
}

fn window_flags(
    t: &[f64],
    x: &[f64],
    half_width: f64,
    estimator: Estimator,
    threshold: f64,
) -> Vec<bool> {
    let mut lo = 0usize;
    let mut hi = 0usize;
    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        while t[lo] < t[i] - half_width {
            lo += 1;
        }
        while hi < x.len() && t[hi] <= t[i] + half_width {
            hi += 1;
        }
        let local = &x[lo..hi];
        let flag = local.len() >= 2
            && matches!(
                stats::centre_scale(local, estimator),
                Some((centre, scale)) if scale > 0.0 && (x[i] - centre).abs() > threshold * scale
            );
        out.push(flag);
    }
    out
}
