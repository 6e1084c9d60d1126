use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A constant value held over the half-open interval `[start, end)`.
///
/// Slices are plain values: trimming or moving one always produces a new
/// slice. `start < end` is expected but not checked here; placement rules are
/// enforced by [`TimeSeries`](crate::TimeSeries) on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Inclusive start.
    pub start: Timestamp,
    /// Exclusive end.
    pub end: Timestamp,
    /// Value held over the whole interval.
    pub value: f64,
}

impl TimeSlice {
    /// Create a slice covering `[start, end)` with `value`.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp, value: f64) -> Self {
        Self { start, end, value }
    }

    /// Strict overlap: slices that only share a boundary do not overlap.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        self.overlaps_range(other.start, other.end)
    }

    /// Strict overlap against an arbitrary `[start, end)` range.
    #[must_use]
    pub fn overlaps_range(&self, start: Timestamp, end: Timestamp) -> bool {
        self.start < end && start < self.end
    }

    /// True if `t` lies strictly inside the slice; boundary instants are excluded.
    #[must_use]
    pub fn contains_strictly(&self, t: Timestamp) -> bool {
        self.start < t && t < self.end
    }

    /// Bounds of the common part of two overlapping slices.
    ///
    /// Returns `None` when the slices do not strictly overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<(Timestamp, Timestamp)> {
        self.overlaps_with(other)
            .then(|| (self.start.max(other.start), self.end.min(other.end)))
    }

    /// Same interval, different value.
    #[must_use]
    pub const fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }

    /// `(start, end)` pair, handy for error construction.
    #[must_use]
    pub const fn bounds(&self) -> (Timestamp, Timestamp) {
        (self.start, self.end)
    }
}
