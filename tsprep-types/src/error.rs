use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tsprep workspace.
///
/// Every operation validates its inputs before computing anything, so an error
/// always describes a problem with the arguments of a single call.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TsPrepError {
    /// Two parallel sequences do not have the same length.
    #[error("length mismatch: {what} has {actual} items, expected {expected}")]
    LengthMismatch {
        /// Name of the offending sequence (e.g. "values", "uncertainties").
        what: String,
        /// Length of the reference sequence (the timestamps).
        expected: usize,
        /// Length that was actually supplied.
        actual: usize,
    },

    /// Timestamps are not sorted ascending.
    #[error("timestamps not sorted ascending at index {index}")]
    Unsorted {
        /// First index whose timestamp is smaller than its predecessor.
        index: usize,
    },

    /// Invalid input argument (window, threshold, width, count...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Input data that cannot be processed (non-finite timestamps, bad uncertainties).
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl TsPrepError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `InvalidData` error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Helper: build a `LengthMismatch` error.
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Returns true if the error is caused by a parameter rather than by the data.
    ///
    /// Callers iterating over many series can use this to abort early: a bad
    /// parameter fails for every series, bad data only for the current one.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArg(_))
    }
}
