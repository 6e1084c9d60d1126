use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Timestamp;

/// Unified error type for the slicewise workspace.
///
/// Every variant is raised synchronously by `TimeSeries::add_time_slice` and
/// aborts that single insertion. Combination operations surface the same
/// variants when a merged slice fails re-validation, which indicates a
/// malformed intermediate state rather than bad user input.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlicewiseError {
    /// The series window starts after it ends.
    #[error("invalid window: start {start} is after end {end}")]
    InvalidWindow {
        /// Window start.
        start: Timestamp,
        /// Window end.
        end: Timestamp,
    },

    /// The slice lies (partly) outside the series window.
    #[error(
        "slice [{slice_start}, {slice_end}) is outside the series window [{window_start}, {window_end}]"
    )]
    OutOfBounds {
        /// Start of the rejected slice.
        slice_start: Timestamp,
        /// End of the rejected slice.
        slice_end: Timestamp,
        /// Start of the series window.
        window_start: Timestamp,
        /// End of the series window.
        window_end: Timestamp,
    },

    /// The slice strictly overlaps a slice already stored in the series.
    #[error("slice [{start}, {end}) overlaps existing slice [{existing_start}, {existing_end})")]
    Overlap {
        /// Start of the rejected slice.
        start: Timestamp,
        /// End of the rejected slice.
        end: Timestamp,
        /// Start of the first conflicting slice found.
        existing_start: Timestamp,
        /// End of the first conflicting slice found.
        existing_end: Timestamp,
    },
}

impl SlicewiseError {
    /// Helper: build an `InvalidWindow` error.
    #[must_use]
    pub const fn invalid_window(start: Timestamp, end: Timestamp) -> Self {
        Self::InvalidWindow { start, end }
    }

    /// Helper: build an `OutOfBounds` error from the slice and window bounds.
    #[must_use]
    pub const fn out_of_bounds(
        slice: (Timestamp, Timestamp),
        window: (Timestamp, Timestamp),
    ) -> Self {
        Self::OutOfBounds {
            slice_start: slice.0,
            slice_end: slice.1,
            window_start: window.0,
            window_end: window.1,
        }
    }

    /// Helper: build an `Overlap` error from the rejected and the conflicting slice bounds.
    #[must_use]
    pub const fn overlap(rejected: (Timestamp, Timestamp), existing: (Timestamp, Timestamp)) -> Self {
        Self::Overlap {
            start: rejected.0,
            end: rejected.1,
            existing_start: existing.0,
            existing_end: existing.1,
        }
    }

    /// Returns true if the error stems from the slice being placed outside
    /// the window or on top of another slice, as opposed to a broken window.
    #[must_use]
    pub const fn is_placement(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::Overlap { .. })
    }
}
