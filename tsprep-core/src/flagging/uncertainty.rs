use tsprep_types::{LargeUncConfig, UncThreshold};

use crate::TsPrepError;
use crate::stats;

/// Flag points whose uncertainty is large compared to a reference level.
///
/// - `MeanMultiple(k)`: flags `u > k * mean(u)`.
/// - `MedianMultiple(k)`: flags `u > k * median(u)`.
/// - `Absolute(limit)`: flags `u > limit`.
///
/// Non-finite uncertainties are always flagged and do not contribute to the
/// mean or median. The returned mask has one entry per input uncertainty;
/// empty input gives an empty mask.
///
/// ```
/// use tsprep_core::{mask_largeunc, LargeUncConfig, UncThreshold};
///
/// let unc = [0.1, 0.1, 0.1, 0.1, 1.0];
/// let cfg = LargeUncConfig { threshold: UncThreshold::MedianMultiple(3.0) };
/// let mask = mask_largeunc(&unc, &cfg).unwrap();
/// assert_eq!(mask, vec![false, false, false, false, true]);
/// ```
///
/// # Errors
/// - Returns `TsPrepError::InvalidArg` if the threshold is negative or non-finite.
/// - Returns `TsPrepError::InvalidData` if any finite uncertainty is negative.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "tsprep::flagging",
        skip(uncertainties),
        fields(n = uncertainties.len()),
    )
)]
pub fn mask_largeunc(
    uncertainties: &[f64],
    cfg: &LargeUncConfig,
) -> Result<Vec<bool>, TsPrepError> {
    cfg.validate()?;
    if let Some(i) = uncertainties.iter().position(|u| u.is_finite() && *u < 0.0) {
        return Err(TsPrepError::invalid_data(format!(
            "uncertainty at index {i} is negative"
        )));
    }

    let finite: Vec<f64> = uncertainties
        .iter()
        .copied()
        .filter(|u| u.is_finite())
        .collect();
    let limit = match cfg.threshold {
        UncThreshold::MeanMultiple(k) => stats::mean(&finite).map(|m| k * m),
        UncThreshold::MedianMultiple(k) => stats::median(&finite).map(|m| k * m),
        UncThreshold::Absolute(limit) => Some(limit),
    };

    let mask: Vec<bool> = uncertainties
        .iter()
        .map(|&u| !u.is_finite() || limit.is_some_and(|l| u > l))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        flagged = mask.iter().filter(|&&m| m).count(),
        limit = ?limit,
        "large uncertainties flagged"
    );

    Ok(mask)
}
