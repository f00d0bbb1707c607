//! Re-export of the shared error and configuration types from `tsprep-types`.
// Consolidated re-exports so downstream crates can depend on `tsprep-core` only

pub use tsprep_types::TsPrepError;

pub use tsprep_types::{
    BinWidth, BinningConfig, Estimator, LargeUncConfig, OutlierConfig, OutlierMethod, PrepConfig,
    SplitConfig, UncThreshold, Weighting,
};
