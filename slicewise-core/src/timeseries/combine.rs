use crate::series::TimeSeries;
use crate::slice::TimeSlice;
use crate::timeseries::coalesce::coalesce_into;
use crate::timeseries::util::{combined_window, uncovered};
use crate::types::{BoundsPolicy, CombineReport, Operation, SlicewiseError};

/// Raw slices representing `left(t) op right(t)` at every instant.
///
/// - Left pass: each left slice yields one slice per overlapping right slice,
///   covering the intersection with value `left op right`. A left slice that
///   overlaps nothing is emitted unchanged; the parts of a partially covered
///   left slice keep the left value.
/// - Right pass: each right slice yields the parts not covered by any left
///   slice, valued `right` for addition and `-right` for subtraction.
///
/// The output is unordered and may contain abutting equal-valued slices, but
/// it is pairwise non-overlapping when both inputs are valid series.
#[must_use]
pub fn combine_slices(left: &TimeSeries, right: &TimeSeries, op: Operation) -> Vec<TimeSlice> {
    let mut raw: Vec<TimeSlice> = Vec::with_capacity(left.len() + right.len());

    for a in left.slices() {
        let mut overlapped = false;
        for b in right.slices() {
            if let Some((start, end)) = a.intersection(b) {
                overlapped = true;
                raw.push(TimeSlice::new(start, end, op.apply(a.value, b.value)));
            }
        }
        if overlapped {
            raw.extend(
                uncovered(a, right.slices())
                    .into_iter()
                    .map(|(start, end)| TimeSlice::new(start, end, a.value)),
            );
        } else {
            raw.push(*a);
        }
    }

    for b in right.slices() {
        let value = op.counterpart(b.value);
        if left.slices().iter().any(|a| a.overlaps_with(b)) {
            raw.extend(
                uncovered(b, left.slices())
                    .into_iter()
                    .map(|(start, end)| TimeSlice::new(start, end, value)),
            );
        } else {
            raw.push(b.with_value(value));
        }
    }

    raw
}

/// Combine two series and coalesce the result into a fresh series.
///
/// The result window spans both input windows and uses `bounds` for its own
/// insertions. Inputs are only read.
///
/// # Errors
/// Returns the `SlicewiseError` raised while committing a merged slice. For
/// valid inputs this does not happen; an error means the raw slices were
/// malformed and the whole operation is abandoned.
pub fn combine_series_with(
    left: &TimeSeries,
    right: &TimeSeries,
    op: Operation,
    bounds: BoundsPolicy,
) -> Result<(TimeSeries, CombineReport), SlicewiseError> {
    let (start, end) = combined_window(left, right);
    let mut result = TimeSeries::with_bounds(start, end, bounds);

    let raw = combine_slices(left, right, op);
    let raw_slices = raw.len();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        operation = %op,
        left = left.len(),
        right = right.len(),
        raw = raw_slices,
        "overlap passes complete"
    );

    let result_slices = coalesce_into(raw, &mut result)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        operation = %op,
        raw = raw_slices,
        committed = result_slices,
        "coalesced combined series"
    );

    let report = CombineReport {
        operation: op,
        left_slices: left.len(),
        right_slices: right.len(),
        raw_slices,
        result_slices,
    };
    Ok((result, report))
}

/// Combine two series under `op` using the default bounds policy.
///
/// # Errors
/// See [`combine_series_with`].
pub fn combine_series(
    left: &TimeSeries,
    right: &TimeSeries,
    op: Operation,
) -> Result<TimeSeries, SlicewiseError> {
    combine_series_with(left, right, op, BoundsPolicy::default()).map(|(series, _)| series)
}

/// Pointwise sum `left(t) + right(t)`.
///
/// # Errors
/// See [`combine_series_with`].
pub fn add_series(left: &TimeSeries, right: &TimeSeries) -> Result<TimeSeries, SlicewiseError> {
    combine_series(left, right, Operation::Add)
}

/// Pointwise difference `left(t) - right(t)`.
///
/// # Errors
/// See [`combine_series_with`].
pub fn subtract_series(
    left: &TimeSeries,
    right: &TimeSeries,
) -> Result<TimeSeries, SlicewiseError> {
    combine_series(left, right, Operation::Subtract)
}
