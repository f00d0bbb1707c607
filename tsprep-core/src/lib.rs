//! tsprep-core
//!
//! Preparation utilities for irregularly sampled time series such as light
//! curves: quality flagging, data-driven binning, and gap splitting.
//!
//! - `series`: the validated `Series` view and shared input checks.
//! - `flagging`: `mask_largeunc`, `mask_outliers` and mask helpers.
//! - `sampling`: `smart_binning`, `bin_series` and `split_data`.
//! - `types`: error and configuration types re-exported from `tsprep-types`.
//!
//! Input conventions
//! -----------------
//! Timestamps are `f64`, finite and sorted ascending (ties allowed). Values
//! and uncertainties are parallel slices of the same length. Every operation
//! is a pure function of its arguments: nothing is cached, nothing is mutated.
//!
//! Non-finite values are flagged automatically by the masking functions and
//! rejected with `TsPrepError::InvalidData` everywhere else.
//!
//! Enable the `tracing` feature to get spans and debug events from every
//! operation.
#![warn(missing_docs)]

/// Quality flagging of individual points.
pub mod flagging;
/// Binning and gap splitting.
pub mod sampling;
/// Series view and input validation.
pub mod series;
mod stats;
pub mod types;

pub use flagging::mask::{combine_masks, count_flagged};
pub use flagging::outliers::mask_outliers;
pub use flagging::uncertainty::mask_largeunc;
pub use sampling::binning::{BinnedPoint, BinningSummary, bin_series, smart_binning, summarize_bins};
pub use sampling::split::{split_data, split_series};
pub use series::{Series, SeriesBuf};
pub use types::*;
