//! Slicewise combines piecewise-constant time series.
//!
//! Overview
//! - Wraps the `slicewise_core` engine behind a small configured orchestrator.
//! - Addition and subtraction work pointwise: overlapping regions combine both
//!   values, regions covered by one side keep that side's contribution (negated
//!   for the subtrahend), gaps stay gaps.
//! - Results are coalesced: abutting slices with exactly equal values merge.
//!
//! Key behaviors and trade-offs
//! - Bounds policy: `Contained` (default) keeps every result slice inside the
//!   combined window; `Legacy` replays the historical admission rule.
//! - Scans are O(n·m) over the input slice counts, fine for a few hundred
//!   slices per series.
//! - With the `tracing` feature each combination runs inside a
//!   `slicewise::core::combine` span and logs raw/merged slice counts.
//!
//! Examples
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slicewise::{Slicewise, TimeSeries, TimeSlice};
//!
//! let day = |d| Utc.with_ymd_and_hms(2023, 1, d, 0, 0, 0).unwrap();
//! let a = TimeSeries::try_from_slices(day(1), day(4), [TimeSlice::new(day(1), day(4), 5.0)])?;
//! let b = TimeSeries::try_from_slices(day(2), day(3), [TimeSlice::new(day(2), day(3), 2.0)])?;
//!
//! let sw = Slicewise::builder().build();
//! let diff = sw.subtract(&a, &b)?;
//! let values: Vec<f64> = diff.sorted_slices().iter().map(|s| s.value).collect();
//! assert_eq!(values, vec![5.0, 3.0, 5.0]);
//! # Ok::<(), slicewise::SlicewiseError>(())
//! ```
#![warn(missing_docs)]

pub(crate) mod core;

pub use crate::core::{Slicewise, SlicewiseBuilder};

// Re-export core types for convenience
pub use slicewise_core::{
    BoundsPolicy, CombineReport, Operation, SlicewiseConfig, SlicewiseError, TimeSeries, TimeSlice,
    Timestamp,
};
