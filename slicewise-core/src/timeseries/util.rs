//! Shared helpers for window arithmetic and slice coverage.

use crate::series::TimeSeries;
use crate::slice::TimeSlice;
use crate::types::Timestamp;

/// Smallest window containing both series' windows.
#[must_use]
pub fn combined_window(left: &TimeSeries, right: &TimeSeries) -> (Timestamp, Timestamp) {
    (
        left.start().min(right.start()),
        left.end().max(right.end()),
    )
}

/// Parts of `slice` not covered by any slice in `others`.
///
/// `others` must be pairwise non-overlapping, which every valid series
/// guarantees. With a single overlapping slice `o` the result is
/// `[slice.start, o.start)` and/or `[o.end, slice.end)`; with none it is the
/// whole of `slice`. Returned ranges are disjoint and in time order.
#[must_use]
pub fn uncovered(slice: &TimeSlice, others: &[TimeSlice]) -> Vec<(Timestamp, Timestamp)> {
    let mut covering: Vec<(Timestamp, Timestamp)> = others
        .iter()
        .filter(|o| o.overlaps_with(slice))
        .map(TimeSlice::bounds)
        .collect();
    covering.sort_unstable_by_key(|&(start, _)| start);

    let mut out = Vec::with_capacity(covering.len() + 1);
    let mut cursor = slice.start;
    for (start, end) in covering {
        if start > cursor {
            out.push((cursor, start));
        }
        cursor = cursor.max(end);
    }
    if cursor < slice.end {
        out.push((cursor, slice.end));
    }
    out
}
