//! Interval algebra over piecewise-constant series.
//!
//! Modules include:
//! - `combine`: overlap passes producing the raw slices of `A op B`
//! - `coalesce`: sort and merge abutting equal-valued slices into a result series
//! - `util`: window and coverage helpers shared by the passes
/// Merging of abutting equal-valued slices.
pub mod coalesce;
/// Pointwise addition and subtraction of two series.
pub mod combine;
/// Window and coverage helpers.
pub mod util;
