use chrono::{DateTime, NaiveDate, Utc};
use slicewise_core::{TimeSeries, TimeSlice};

pub fn by_name(name: &str) -> Option<TimeSeries> {
    match name {
        "A" => Some(build(
            ("2023-01-03", "2023-01-08"),
            vec![("2023-01-03", "2023-01-05", 2.0), ("2023-01-06", "2023-01-07", 3.0)],
        )),
        "B" => Some(build(
            ("2023-01-04", "2023-01-10"),
            vec![
                ("2023-01-05", "2023-01-06", 2.0),
                ("2023-01-06", "2023-01-08", 1.0),
                ("2023-01-09", "2023-01-10", 1.0),
            ],
        )),
        "STEP" => Some(build(
            ("2023-01-01", "2023-01-31"),
            vec![
                ("2023-01-01", "2023-01-08", 1.0),
                ("2023-01-08", "2023-01-15", 2.0),
                ("2023-01-15", "2023-01-22", 3.0),
                ("2023-01-22", "2023-01-29", 4.0),
            ],
        )),
        "FLAT" => {
            let days: Vec<String> = (1..=31).map(|d| format!("2023-01-{d:02}")).collect();
            let rows = days
                .windows(2)
                .map(|w| (w[0].as_str(), w[1].as_str(), 1.5))
                .collect();
            Some(build(("2023-01-01", "2023-01-31"), rows))
        }
        "EMPTY" => Some(build(("2023-01-01", "2023-01-31"), vec![])),
        _ => None,
    }
}

fn ts(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

fn build(window: (&str, &str), rows: Vec<(&str, &str, f64)>) -> TimeSeries {
    TimeSeries::try_from_slices(
        ts(window.0),
        ts(window.1),
        rows.into_iter()
            .map(|(start, end, value)| TimeSlice::new(ts(start), ts(end), value)),
    )
    .unwrap()
}
