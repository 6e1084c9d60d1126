use crate::series::TimeSeries;
use crate::slice::TimeSlice;
use crate::types::SlicewiseError;

/// Sort slices by start and merge each run of abutting equal-valued slices.
///
/// Two neighbours merge when `current.end == next.start` and their values are
/// exactly equal; there is no tolerance. The sort is stable, so slices sharing
/// a start keep their relative order. Applying this twice gives the same
/// result as applying it once.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn coalesce(mut slices: Vec<TimeSlice>) -> Vec<TimeSlice> {
    slices.sort_by_key(|s| s.start);

    let mut out: Vec<TimeSlice> = Vec::with_capacity(slices.len());
    let mut iter = slices.into_iter();
    let Some(mut current) = iter.next() else {
        return out;
    };

    for next in iter {
        if current.end == next.start && current.value == next.value {
            current = TimeSlice::new(current.start, next.end, current.value);
        } else {
            out.push(current);
            current = next;
        }
    }
    out.push(current);
    out
}

/// Coalesce `slices` and commit every merged slice to `target`.
///
/// Returns the number of committed slices. Empty input commits nothing.
///
/// # Errors
/// Propagates the first `add_time_slice` failure. Slices committed before the
/// failure stay in `target`.
pub fn coalesce_into(
    slices: Vec<TimeSlice>,
    target: &mut TimeSeries,
) -> Result<usize, SlicewiseError> {
    let merged = coalesce(slices);
    let committed = merged.len();
    for slice in merged {
        #[cfg(feature = "tracing")]
        tracing::trace!(start = %slice.start, end = %slice.end, value = slice.value, "commit slice");
        target.add_time_slice(slice)?;
    }
    Ok(committed)
}
