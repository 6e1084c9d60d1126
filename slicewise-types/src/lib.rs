//! Slicewise-specific error, configuration, and report types shared by the
//! core engine and the orchestrator.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;

pub use config::{BoundsPolicy, Operation, SlicewiseConfig};
pub use error::SlicewiseError;
pub use reports::CombineReport;

/// Linear instant used for slice boundaries and series windows.
///
/// Only ordering and equality are relied upon; no calendar arithmetic happens
/// anywhere in the workspace.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
