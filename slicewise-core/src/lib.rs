//! slicewise-core
//!
//! Piecewise-constant time series and the interval algebra built on them.
//!
//! - `slice`: [`TimeSlice`], a value held over `[start, end)`.
//! - `series`: [`TimeSeries`], a bounded, validated collection of non-overlapping slices.
//! - `timeseries`: pointwise addition/subtraction of two series and coalescing.
//! - `types`: re-exports of the shared error and configuration types.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use slicewise_core::{TimeSeries, TimeSlice, add_series};
//!
//! let day = |d| Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap();
//!
//! let mut a = TimeSeries::new(day(1), day(5));
//! a.add_time_slice(TimeSlice::new(day(1), day(3), 1.0))?;
//! let mut b = TimeSeries::new(day(2), day(6));
//! b.add_time_slice(TimeSlice::new(day(2), day(6), 2.0))?;
//!
//! let sum = add_series(&a, &b)?;
//! let values: Vec<f64> = sum.sorted_slices().iter().map(|s| s.value).collect();
//! assert_eq!(values, vec![1.0, 3.0, 2.0]);
//! # Ok::<(), slicewise_core::SlicewiseError>(())
//! ```
#![warn(missing_docs)]

/// Bounded series container and its queries.
pub mod series;
/// Immutable interval value carrier.
pub mod slice;
/// Interval algebra: combination and coalescing.
pub mod timeseries;
pub mod types;

pub use series::TimeSeries;
pub use slice::TimeSlice;
pub use timeseries::coalesce::{coalesce, coalesce_into};
pub use timeseries::combine::{
    add_series, combine_series, combine_series_with, combine_slices, subtract_series,
};
pub use types::*;
