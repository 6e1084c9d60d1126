use chrono::{TimeZone, Utc};
use slicewise::{TimeSeries, TimeSlice};
use slicewise_demos::common::print_series;

fn fmt(v: Option<f64>) -> String {
    v.map_or_else(|| "no value".to_string(), |v| format!("{v:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let day = |d| Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap();

    let mut series = TimeSeries::try_new(day(1), day(11))?;
    series.add_time_slice(TimeSlice::new(day(1), day(3), 5.0))?;
    series.add_time_slice(TimeSlice::new(day(3), day(5), 3.0))?;
    series.add_time_slice(TimeSlice::new(day(7), day(9), 4.0))?;
    print_series(&series);

    println!("\nvalue at 02.01.: {}", fmt(series.value_at(day(2))));
    println!("value at 03.01. (boundary): {}", fmt(series.value_at(day(3))));
    println!("min 01.01.-05.01.: {}", fmt(series.min_value(day(1), day(5))));
    println!("max 01.01.-11.01.: {}", fmt(series.max_value(day(1), day(11))));
    println!("avg 01.01.-11.01.: {}", fmt(series.average_value(day(1), day(11))));
    println!("avg 05.01.-07.01.: {}", fmt(series.average_value(day(5), day(7))));

    if let Err(e) = series.add_time_slice(TimeSlice::new(day(2), day(4), 1.0)) {
        let kind = if e.is_placement() { "placement" } else { "other" };
        println!("\nrejected ({kind}): {e}");
    }

    let removed = series.remove_time_slice(day(2), day(4));
    println!("removed {removed} slices overlapping 02.01.-04.01.\n");
    print_series(&series);
    Ok(())
}
