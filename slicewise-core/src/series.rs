use serde::{Deserialize, Serialize};

use crate::slice::TimeSlice;
use crate::types::{BoundsPolicy, SlicewiseError, Timestamp};

/// A bounded timeline holding non-overlapping [`TimeSlice`]s.
///
/// Invariants, checked by [`add_time_slice`](Self::add_time_slice) on every insertion:
/// - the window satisfies `start <= end`;
/// - every slice is admitted by the series' [`BoundsPolicy`];
/// - no two slices strictly overlap. Abutting slices and gaps are both legal;
///   a gap simply has no value.
///
/// Slices are kept in insertion order. Use [`sorted_slices`](Self::sorted_slices)
/// when time order matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct TimeSeries {
    start: Timestamp,
    end: Timestamp,
    bounds: BoundsPolicy,
    slices: Vec<TimeSlice>,
}

/// Unvalidated wire shape; every slice is replayed through `add_time_slice`.
#[derive(Deserialize)]
struct RawSeries {
    start: Timestamp,
    end: Timestamp,
    #[serde(default)]
    bounds: BoundsPolicy,
    #[serde(default)]
    slices: Vec<TimeSlice>,
}

impl TryFrom<RawSeries> for TimeSeries {
    type Error = SlicewiseError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        let mut series = Self::with_bounds(raw.start, raw.end, raw.bounds);
        for slice in raw.slices {
            series.add_time_slice(slice)?;
        }
        Ok(series)
    }
}

impl TimeSeries {
    /// Create an empty series over `[start, end]` with the default bounds policy.
    ///
    /// The window is not validated here; an inverted window is reported by the
    /// first insertion. Use [`try_new`](Self::try_new) to fail early instead.
    #[must_use]
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self::with_bounds(start, end, BoundsPolicy::default())
    }

    /// Create an empty series using an explicit bounds policy.
    #[must_use]
    pub const fn with_bounds(start: Timestamp, end: Timestamp, bounds: BoundsPolicy) -> Self {
        Self {
            start,
            end,
            bounds,
            slices: Vec::new(),
        }
    }

    /// Create an empty series, rejecting an inverted window up front.
    ///
    /// # Errors
    /// Returns `Err(SlicewiseError::InvalidWindow)` if `start > end`.
    pub fn try_new(start: Timestamp, end: Timestamp) -> Result<Self, SlicewiseError> {
        if start > end {
            return Err(SlicewiseError::invalid_window(start, end));
        }
        Ok(Self::new(start, end))
    }

    /// Build a series and insert every slice in iteration order.
    ///
    /// # Errors
    /// Propagates the first error returned by [`add_time_slice`](Self::add_time_slice).
    pub fn try_from_slices<I>(
        start: Timestamp,
        end: Timestamp,
        slices: I,
    ) -> Result<Self, SlicewiseError>
    where
        I: IntoIterator<Item = TimeSlice>,
    {
        let mut series = Self::new(start, end);
        for slice in slices {
            series.add_time_slice(slice)?;
        }
        Ok(series)
    }

    /// Window start.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Window end.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Bounds policy applied on insertion.
    #[must_use]
    pub const fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Slices in insertion order.
    #[must_use]
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Copy of the slices, stably sorted by start.
    #[must_use]
    pub fn sorted_slices(&self) -> Vec<TimeSlice> {
        let mut out = self.slices.clone();
        out.sort_by_key(|s| s.start);
        out
    }

    /// Number of stored slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// True if no slice is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Validate and append a slice.
    ///
    /// # Errors
    /// - `SlicewiseError::InvalidWindow` if the series window is inverted.
    /// - `SlicewiseError::OutOfBounds` if the bounds policy rejects the slice.
    /// - `SlicewiseError::Overlap` if the slice strictly overlaps a stored one;
    ///   the first conflict in insertion order is reported.
    pub fn add_time_slice(&mut self, slice: TimeSlice) -> Result<(), SlicewiseError> {
        if self.start > self.end {
            return Err(SlicewiseError::invalid_window(self.start, self.end));
        }
        if !self
            .bounds
            .admits(&slice.start, &slice.end, &self.start, &self.end)
        {
            return Err(SlicewiseError::out_of_bounds(
                slice.bounds(),
                (self.start, self.end),
            ));
        }
        if let Some(existing) = self.slices.iter().find(|s| s.overlaps_with(&slice)) {
            return Err(SlicewiseError::overlap(slice.bounds(), existing.bounds()));
        }
        self.slices.push(slice);
        Ok(())
    }

    /// Remove every slice strictly overlapping `[start, end)`.
    ///
    /// Returns the number of removed slices; removing nothing is not an error.
    pub fn remove_time_slice(&mut self, start: Timestamp, end: Timestamp) -> usize {
        let before = self.slices.len();
        self.slices.retain(|s| !s.overlaps_range(start, end));
        before - self.slices.len()
    }

    /// Value of the first slice whose open interval contains `t`.
    ///
    /// Boundary instants belong to no slice and yield `None`.
    #[must_use]
    pub fn value_at(&self, t: Timestamp) -> Option<f64> {
        self.slices
            .iter()
            .find(|s| s.contains_strictly(t))
            .map(|s| s.value)
    }

    /// Smallest value among slices overlapping `[start, end)`.
    #[must_use]
    pub fn min_value(&self, start: Timestamp, end: Timestamp) -> Option<f64> {
        self.values_in(start, end).reduce(f64::min)
    }

    /// Largest value among slices overlapping `[start, end)`.
    #[must_use]
    pub fn max_value(&self, start: Timestamp, end: Timestamp) -> Option<f64> {
        self.values_in(start, end).reduce(f64::max)
    }

    /// Arithmetic mean of the values of slices overlapping `[start, end)`.
    ///
    /// Each qualifying slice counts once regardless of how long it is or how
    /// much of it falls inside the range.
    #[must_use]
    pub fn average_value(&self, start: Timestamp, end: Timestamp) -> Option<f64> {
        let (sum, count) = self
            .values_in(start, end)
            .fold((0.0_f64, 0_u32), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / f64::from(count))
    }

    fn values_in(&self, start: Timestamp, end: Timestamp) -> impl Iterator<Item = f64> + '_ {
        self.slices
            .iter()
            .filter(move |s| s.overlaps_range(start, end))
            .map(|s| s.value)
    }
}
