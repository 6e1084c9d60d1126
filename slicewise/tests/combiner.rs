use chrono::{TimeZone, Utc};
use slicewise::{
    BoundsPolicy, Operation, Slicewise, SlicewiseConfig, SlicewiseError, TimeSeries, TimeSlice,
};
use slicewise_mock::{scenario, series};

fn values(s: &TimeSeries) -> Vec<f64> {
    s.sorted_slices().iter().map(|s| s.value).collect()
}

#[test]
fn add_scenario_yields_four_slices() {
    let (a, b) = scenario();
    let sw = Slicewise::builder().build();
    let sum = sw.add(&a, &b).unwrap();
    assert_eq!(values(&sum), vec![2.0, 4.0, 1.0, 1.0]);
}

#[test]
fn subtract_scenario_yields_five_slices() {
    let (a, b) = scenario();
    let sw = Slicewise::builder().build();
    let diff = sw.subtract(&a, &b).unwrap();
    assert_eq!(values(&diff), vec![2.0, -2.0, 2.0, -1.0, -1.0]);
}

#[test]
fn combine_dispatches_on_operation() {
    let (a, b) = scenario();
    let sw = Slicewise::default();
    assert_eq!(
        sw.combine(Operation::Add, &a, &b).unwrap(),
        sw.add(&a, &b).unwrap()
    );
    assert_eq!(
        sw.combine(Operation::Subtract, &a, &b).unwrap(),
        sw.subtract(&a, &b).unwrap()
    );
}

#[test]
fn report_describes_the_run() {
    let (a, b) = scenario();
    let (result, report) = Slicewise::builder()
        .build()
        .combine_with_report(Operation::Subtract, &a, &b)
        .unwrap();
    assert_eq!(report.operation, Operation::Subtract);
    assert_eq!((report.left_slices, report.right_slices), (2, 3));
    assert_eq!(report.raw_slices, 5);
    assert_eq!(report.result_slices, result.len());
    assert_eq!(report.merged_away(), 0);
}

#[test]
fn flat_fixture_collapses_to_one_slice() {
    let flat = series("FLAT").unwrap();
    let empty = series("EMPTY").unwrap();
    let sw = Slicewise::builder().build();
    let (sum, report) = sw.combine_with_report(Operation::Add, &flat, &empty).unwrap();
    assert_eq!(sum.len(), 1);
    assert_eq!(report.raw_slices, 30);
    assert_eq!(report.merged_away(), 29);
}

#[test]
fn step_minus_itself_is_zero_everywhere() {
    let step = series("STEP").unwrap();
    let diff = Slicewise::builder().build().subtract(&step, &step).unwrap();
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.slices()[0].value, 0.0);
    assert_eq!(diff.slices()[0].start, step.sorted_slices()[0].start);
}

#[test]
fn builder_bounds_reach_result_series() {
    let day = |d| Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap();
    let mut legacy = TimeSeries::with_bounds(day(3), day(8), BoundsPolicy::Legacy);
    legacy
        .add_time_slice(TimeSlice::new(day(1), day(4), 1.0))
        .unwrap();
    let other = TimeSeries::new(day(3), day(8));

    let strict = Slicewise::builder().build();
    assert!(matches!(
        strict.add(&legacy, &other),
        Err(SlicewiseError::OutOfBounds { .. })
    ));

    let lenient = Slicewise::builder().bounds(BoundsPolicy::Legacy).build();
    let sum = lenient.add(&legacy, &other).unwrap();
    assert_eq!(sum.bounds(), BoundsPolicy::Legacy);
    assert_eq!(sum.len(), 1);
}

#[test]
fn config_replaces_defaults() {
    let cfg = SlicewiseConfig {
        bounds: BoundsPolicy::Legacy,
    };
    let sw = Slicewise::builder().config(cfg).build();
    assert_eq!(sw.config(), &cfg);
    assert_eq!(Slicewise::builder().build().config().bounds, BoundsPolicy::Contained);
}

mod generated {
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;
    use slicewise::{BoundsPolicy, Operation, Slicewise, TimeSeries, TimeSlice};

    fn t(minutes: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(minutes * 60, 0).unwrap()
    }

    fn arb_series() -> impl Strategy<Value = TimeSeries> {
        (
            0i64..20,
            proptest::collection::vec((0i64..3, 1i64..5, -4i32..5), 0..6),
        )
            .prop_map(|(origin, parts)| {
                let mut slices = Vec::with_capacity(parts.len());
                let mut cursor = origin;
                for (gap, len, value) in parts {
                    let start = cursor + gap;
                    slices.push(TimeSlice::new(t(start), t(start + len), f64::from(value)));
                    cursor = start + len;
                }
                TimeSeries::try_from_slices(t(origin), t(cursor), slices).unwrap()
            })
    }

    proptest! {
        #[test]
        fn orchestrator_matches_engine(a in arb_series(), b in arb_series()) {
            let sw = Slicewise::builder().build();
            prop_assert_eq!(sw.add(&a, &b).unwrap(), slicewise_core::add_series(&a, &b).unwrap());
            prop_assert_eq!(
                sw.subtract(&a, &b).unwrap(),
                slicewise_core::subtract_series(&a, &b).unwrap()
            );
        }

        #[test]
        fn report_counts_match_result(a in arb_series(), b in arb_series()) {
            let sw = Slicewise::builder().bounds(BoundsPolicy::Contained).build();
            let (series, report) = sw.combine_with_report(Operation::Subtract, &a, &b).unwrap();
            prop_assert_eq!(report.result_slices, series.len());
            prop_assert_eq!(report.left_slices, a.len());
            prop_assert_eq!(report.right_slices, b.len());
            prop_assert!(report.raw_slices >= report.result_slices);
        }
    }
}
