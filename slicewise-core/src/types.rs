//! Re-export of foundational types from `slicewise-types`.
// Consolidated re-exports so downstream crates can depend on `slicewise-core` only

pub use slicewise_types::{BoundsPolicy, Operation, SlicewiseConfig, SlicewiseError, Timestamp};

pub use slicewise_types::CombineReport;
