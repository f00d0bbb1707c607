//! Resampling helpers for unevenly sampled series.
//!
//! Modules include:
//! - `binning`: data-driven binning and bin aggregation
//! - `split`: split a series into segments at large gaps
/// Smart binning and aggregation.
pub mod binning;
/// Gap splitting.
pub mod split;
