use chrono::{DateTime, TimeZone, Utc};
use slicewise_core::{TimeSeries, TimeSlice};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap()
}

fn two_slices() -> TimeSeries {
    TimeSeries::try_from_slices(
        day(1),
        day(11),
        [
            TimeSlice::new(day(1), day(3), 5.0),
            TimeSlice::new(day(3), day(5), 3.0),
        ],
    )
    .unwrap()
}

#[test]
fn value_inside_slice() {
    assert_eq!(two_slices().value_at(day(2)), Some(5.0));
}

#[test]
fn value_on_boundary_is_none() {
    let s = two_slices();
    assert_eq!(s.value_at(day(1)), None);
    assert_eq!(s.value_at(day(3)), None);
    assert_eq!(s.value_at(day(5)), None);
}

#[test]
fn value_outside_any_slice_is_none() {
    assert_eq!(two_slices().value_at(day(8)), None);
}

#[test]
fn min_max_average_over_covered_range() {
    let s = two_slices();
    assert_eq!(s.min_value(day(1), day(5)), Some(3.0));
    assert_eq!(s.max_value(day(1), day(5)), Some(5.0));
    assert_eq!(s.average_value(day(1), day(5)), Some(4.0));
}

#[test]
fn average_is_unweighted_by_duration() {
    let s = TimeSeries::try_from_slices(
        day(1),
        day(11),
        [
            TimeSlice::new(day(1), day(10), 1.0),
            TimeSlice::new(day(10), day(11), 4.0),
        ],
    )
    .unwrap();
    assert_eq!(s.average_value(day(1), day(11)), Some(2.5));
}

#[test]
fn range_touching_only_a_boundary_selects_nothing() {
    let s = two_slices();
    assert_eq!(s.min_value(day(5), day(8)), None);
    assert_eq!(s.min_value(day(4), day(8)), Some(3.0));
}

#[test]
fn aggregates_over_empty_range_are_none() {
    let s = two_slices();
    assert_eq!(s.min_value(day(7), day(9)), None);
    assert_eq!(s.max_value(day(7), day(9)), None);
    assert_eq!(s.average_value(day(7), day(9)), None);

    let empty = TimeSeries::new(day(1), day(11));
    assert_eq!(empty.min_value(day(1), day(11)), None);
    assert_eq!(empty.max_value(day(1), day(11)), None);
    assert_eq!(empty.average_value(day(1), day(11)), None);
}
