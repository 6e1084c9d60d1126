//! Deterministic fixture series for tests and demos.
//!
//! Fixtures are looked up by name; unknown names return `None`.

use slicewise_core::TimeSeries;

mod fixtures;

/// Names accepted by [`series`].
pub const NAMES: &[&str] = &["A", "B", "STEP", "FLAT", "EMPTY"];

/// Fixture series by name.
///
/// - `A`: window 2023-01-03..2023-01-08, `[3,5)=2.0`, `[6,7)=3.0`.
/// - `B`: window 2023-01-04..2023-01-10, `[5,6)=2.0`, `[6,8)=1.0`, `[9,10)=1.0`.
/// - `STEP`: January 2023 in weekly steps of increasing value, no gaps.
/// - `FLAT`: January 2023 split into abutting days holding the same value.
/// - `EMPTY`: window 2023-01-01..2023-01-31 with no slices.
#[must_use]
pub fn series(name: &str) -> Option<TimeSeries> {
    fixtures::series::by_name(name)
}

/// The pair used throughout the docs: (`A`, `B`).
///
/// # Panics
/// Panics if a static fixture is malformed.
#[must_use]
pub fn scenario() -> (TimeSeries, TimeSeries) {
    (
        fixtures::series::by_name("A").expect("fixture A"),
        fixtures::series::by_name("B").expect("fixture B"),
    )
}
