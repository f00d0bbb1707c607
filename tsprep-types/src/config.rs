//! Configuration types for the flagging, binning and splitting operations.

use serde::{Deserialize, Serialize};

use crate::TsPrepError;

/// Reference level above which an uncertainty counts as large.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UncThreshold {
    /// Flag uncertainties larger than this factor times the mean uncertainty.
    MeanMultiple(f64),
    /// Flag uncertainties larger than this factor times the median uncertainty.
    MedianMultiple(f64),
    /// Flag uncertainties larger than this absolute value.
    Absolute(f64),
}

impl Default for UncThreshold {
    fn default() -> Self {
        Self::MeanMultiple(3.0)
    }
}

/// Settings for `mask_largeunc`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LargeUncConfig {
    /// Threshold rule.
    pub threshold: UncThreshold,
}

impl LargeUncConfig {
    /// Check that the threshold is a finite, non-negative number.
    ///
    /// # Errors
    /// Returns `TsPrepError::InvalidArg` for negative or non-finite factors and limits.
    pub fn validate(&self) -> Result<(), TsPrepError> {
        let (label, v) = match self.threshold {
            UncThreshold::MeanMultiple(k) => ("mean multiple", k),
            UncThreshold::MedianMultiple(k) => ("median multiple", k),
            UncThreshold::Absolute(limit) => ("absolute limit", limit),
        };
        if !v.is_finite() || v < 0.0 {
            return Err(TsPrepError::invalid_arg(format!(
                "uncertainty threshold {label} must be finite and >= 0, got {v}"
            )));
        }
        Ok(())
    }
}

/// Location/scale estimator pair used by the statistical outlier methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Estimator {
    /// Mean and population standard deviation.
    MeanStd,
    /// Median and median absolute deviation, scaled to be consistent with a
    /// normal standard deviation.
    #[default]
    MedianMad,
}

/// How the expected value of each point is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Compare against a Hann-smoothed curve; the threshold scales the mean
    /// absolute residual.
    Smoothed {
        /// Hann window length in points (odd, at least 3).
        window_length: usize,
    },
    /// Compare against the centre of the whole series.
    Global {
        /// Centre and scale estimator.
        estimator: Estimator,
    },
    /// Compare against the centre of the points within `half_width` time
    /// units of each point.
    Window {
        /// Half width of the time window.
        half_width: f64,
        /// Centre and scale estimator.
        estimator: Estimator,
    },
}

impl Default for OutlierMethod {
    fn default() -> Self {
        Self::Smoothed { window_length: 5 }
    }
}

/// Settings for `mask_outliers`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Estimation method.
    pub method: OutlierMethod,
    /// Multiple of the scale estimate beyond which a point is an outlier.
    pub threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            method: OutlierMethod::default(),
            threshold: 3.0,
        }
    }
}

impl OutlierConfig {
    /// Check the threshold and the method parameters.
    ///
    /// # Errors
    /// Returns `TsPrepError::InvalidArg` if the threshold is negative or
    /// non-finite, the smoothing window is even or shorter than 3, or the time
    /// window half width is not finite and positive.
    pub fn validate(&self) -> Result<(), TsPrepError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(TsPrepError::invalid_arg(format!(
                "outlier threshold must be finite and >= 0, got {}",
                self.threshold
            )));
        }
        match self.method {
            OutlierMethod::Smoothed { window_length } => {
                if window_length < 3 || window_length % 2 == 0 {
                    return Err(TsPrepError::invalid_arg(format!(
                        "window_length must be odd and >= 3, got {window_length}"
                    )));
                }
            }
            OutlierMethod::Window { half_width, .. } => {
                if !half_width.is_finite() || half_width <= 0.0 {
                    return Err(TsPrepError::invalid_arg(format!(
                        "half_width must be finite and > 0, got {half_width}"
                    )));
                }
            }
            OutlierMethod::Global { .. } => {}
        }
        Ok(())
    }
}

/// Target bin size for `smart_binning`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BinWidth {
    /// Maximum time extent of a bin.
    Interval(f64),
    /// Derive the interval by dividing the time span into this many parts.
    Count(usize),
}

impl Default for BinWidth {
    fn default() -> Self {
        Self::Interval(1.0)
    }
}

/// Averaging scheme used when aggregating a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Weighting {
    /// Plain arithmetic mean.
    #[default]
    Uniform,
    /// Inverse-variance weighted mean; requires positive uncertainties.
    InverseVariance,
}

/// Settings for `smart_binning` and `bin_series`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BinningConfig {
    /// Bin size.
    pub width: BinWidth,
    /// Averaging scheme.
    pub weighting: Weighting,
    /// Emit points that share no interval with any neighbour as single-point
    /// bins instead of dropping them.
    pub keep_isolated: bool,
}

impl BinningConfig {
    /// Check the bin width.
    ///
    /// # Errors
    /// Returns `TsPrepError::InvalidArg` for a non-positive or non-finite
    /// interval and for a zero count.
    pub fn validate(&self) -> Result<(), TsPrepError> {
        match self.width {
            BinWidth::Interval(w) if !w.is_finite() || w <= 0.0 => Err(TsPrepError::invalid_arg(
                format!("bin interval must be finite and > 0, got {w}"),
            )),
            BinWidth::Count(0) => Err(TsPrepError::invalid_arg("bin count must be >= 1")),
            _ => Ok(()),
        }
    }
}

/// Settings for splitting a series at gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// A new segment starts wherever consecutive timestamps differ by more than this.
    pub gap: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { gap: 10.0 }
    }
}

impl SplitConfig {
    /// Check the gap threshold.
    ///
    /// # Errors
    /// Returns `TsPrepError::InvalidArg` for a negative or non-finite gap.
    pub fn validate(&self) -> Result<(), TsPrepError> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(TsPrepError::invalid_arg(format!(
                "gap must be finite and >= 0, got {}",
                self.gap
            )));
        }
        Ok(())
    }
}

/// All preparation settings in one place, convenient for loading from a file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Large-uncertainty flagging.
    pub large_unc: LargeUncConfig,
    /// Outlier flagging.
    pub outliers: OutlierConfig,
    /// Binning and aggregation.
    pub binning: BinningConfig,
    /// Gap splitting.
    pub split: SplitConfig,
}

impl PrepConfig {
    /// Validate every section.
    ///
    /// # Errors
    /// Returns the first `TsPrepError::InvalidArg` reported by a section.
    pub fn validate(&self) -> Result<(), TsPrepError> {
        self.large_unc.validate()?;
        self.outliers.validate()?;
        self.binning.validate()?;
        self.split.validate()
    }
}
