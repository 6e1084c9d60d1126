use std::fmt;

use slicewise::TimeSeries;

const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Display adapter printing a header line plus one line per slice in time order.
///
/// ```text
/// Time series from 03.01.2023 00:00 to 08.01.2023 00:00
/// Start: 03.01.2023 00:00, End: 05.01.2023 00:00, Value: 2.0
/// ```
pub struct Rendered<'a>(pub &'a TimeSeries);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let series = self.0;
        writeln!(
            f,
            "Time series from {} to {}",
            series.start().format(DATE_FORMAT),
            series.end().format(DATE_FORMAT)
        )?;
        for slice in series.sorted_slices() {
            writeln!(
                f,
                "Start: {}, End: {}, Value: {:?}",
                slice.start.format(DATE_FORMAT),
                slice.end.format(DATE_FORMAT),
                slice.value
            )?;
        }
        Ok(())
    }
}

/// Render a series to a string through [`Rendered`].
#[must_use]
pub fn render(series: &TimeSeries) -> String {
    Rendered(series).to_string()
}

/// Print a series to stdout using [`render`].
pub fn print_series(series: &TimeSeries) {
    print!("{}", Rendered(series));
}

/// Install a human-friendly tracing subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
