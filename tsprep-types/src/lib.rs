//! Error type and configuration primitives shared by the tsprep crates.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{
    BinWidth, BinningConfig, Estimator, LargeUncConfig, OutlierConfig, OutlierMethod, PrepConfig,
    SplitConfig, UncThreshold, Weighting,
};
pub use error::TsPrepError;
