//! Borrowed series view and the shared input checks.

use core::ops::Range;

use crate::TsPrepError;

/// Ensure a parallel sequence has the same length as the timestamps.
///
/// # Errors
/// Returns `TsPrepError::LengthMismatch` naming `what` if the lengths differ.
pub fn ensure_same_len(what: &str, expected: usize, actual: usize) -> Result<(), TsPrepError> {
    if expected != actual {
        return Err(TsPrepError::length_mismatch(what, expected, actual));
    }
    Ok(())
}

/// Ensure timestamps are finite and sorted ascending (ties allowed).
///
/// # Errors
/// - Returns `TsPrepError::InvalidData` for the first non-finite timestamp.
/// - Returns `TsPrepError::Unsorted` for the first timestamp smaller than its predecessor.
pub fn ensure_ascending(times: &[f64]) -> Result<(), TsPrepError> {
    if let Some(i) = times.iter().position(|t| !t.is_finite()) {
        return Err(TsPrepError::invalid_data(format!(
            "timestamp at index {i} is not finite"
        )));
    }
    if let Some(i) = times.windows(2).position(|w| w[1] < w[0]) {
        return Err(TsPrepError::Unsorted { index: i + 1 });
    }
    Ok(())
}

/// A validated view over caller-owned time series slices.
///
/// Construction checks that timestamps are finite and ascending and that the
/// parallel sequences have matching lengths. Values and uncertainties are not
/// checked for finiteness here; each operation applies its own policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    times: &'a [f64],
    values: &'a [f64],
    uncertainties: Option<&'a [f64]>,
}

impl<'a> Series<'a> {
    /// Build a series without uncertainties.
    ///
    /// # Errors
    /// Returns an error if the lengths differ or the timestamps are not finite
    /// and ascending.
    pub fn new(times: &'a [f64], values: &'a [f64]) -> Result<Self, TsPrepError> {
        ensure_same_len("values", times.len(), values.len())?;
        ensure_ascending(times)?;
        Ok(Self {
            times,
            values,
            uncertainties: None,
        })
    }

    /// Build a series with per-point uncertainties.
    ///
    /// # Errors
    /// Returns an error if any length differs or the timestamps are not finite
    /// and ascending.
    pub fn with_uncertainties(
        times: &'a [f64],
        values: &'a [f64],
        uncertainties: &'a [f64],
    ) -> Result<Self, TsPrepError> {
        ensure_same_len("uncertainties", times.len(), uncertainties.len())?;
        let mut s = Self::new(times, values)?;
        s.uncertainties = Some(uncertainties);
        Ok(s)
    }

    /// Timestamps.
    #[must_use]
    pub const fn times(&self) -> &'a [f64] {
        self.times
    }

    /// Values.
    #[must_use]
    pub const fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Uncertainties, if the series carries them.
    #[must_use]
    pub const fn uncertainties(&self) -> Option<&'a [f64]> {
        self.uncertainties
    }

    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.times.len()
    }

    /// True if the series has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sub-series over an index range. Sorting and length invariants carry over.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds, like slice indexing.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            times: &self.times[range.clone()],
            values: &self.values[range.clone()],
            uncertainties: self.uncertainties.map(|u| &u[range]),
        }
    }

    /// Copy the points whose mask entry is `false` into an owned series.
    ///
    /// # Errors
    /// Returns `TsPrepError::LengthMismatch` if the mask length differs from the series length.
    pub fn apply_mask(&self, mask: &[bool]) -> Result<SeriesBuf, TsPrepError> {
        ensure_same_len("mask", self.len(), mask.len())?;
        let keep = |i: &usize| !mask[*i];
        let idx: Vec<usize> = (0..self.len()).filter(keep).collect();
        Ok(SeriesBuf {
            times: idx.iter().map(|&i| self.times[i]).collect(),
            values: idx.iter().map(|&i| self.values[i]).collect(),
            uncertainties: self
                .uncertainties
                .map(|u| idx.iter().map(|&i| u[i]).collect()),
        })
    }
}

/// Owned counterpart of [`Series`], produced by filtering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesBuf {
    /// Timestamps, ascending.
    pub times: Vec<f64>,
    /// Values.
    pub values: Vec<f64>,
    /// Optional uncertainties.
    pub uncertainties: Option<Vec<f64>>,
}

impl SeriesBuf {
    /// Borrow as a validated [`Series`].
    ///
    /// # Errors
    /// Returns an error if the fields were modified into an inconsistent state.
    pub fn as_series(&self) -> Result<Series<'_>, TsPrepError> {
        match &self.uncertainties {
            Some(u) => Series::with_uncertainties(&self.times, &self.values, u),
            None => Series::new(&self.times, &self.values),
        }
    }
}
