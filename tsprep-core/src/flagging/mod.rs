//! Quality flagging.
//!
//! Modules include:
//! - `uncertainty`: flag points with large uncertainties
//! - `outliers`: flag points far from the expected level of the series
//! - `mask`: combine and summarize masks
/// Mask combination helpers.
pub mod mask;
/// Outlier detection.
pub mod outliers;
/// Large-uncertainty detection.
pub mod uncertainty;
