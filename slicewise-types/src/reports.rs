//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::config::Operation;

/// Summary of a single combination run.
///
/// Useful for spotting how much redundancy the coalescing pass removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombineReport {
    /// Operator that was applied.
    pub operation: Operation,
    /// Slice count of the left input series.
    pub left_slices: usize,
    /// Slice count of the right input series.
    pub right_slices: usize,
    /// Slices emitted by the overlap passes before coalescing.
    pub raw_slices: usize,
    /// Slices committed to the result series after coalescing.
    pub result_slices: usize,
}

impl CombineReport {
    /// Number of raw slices absorbed by coalescing.
    #[must_use]
    pub const fn merged_away(&self) -> usize {
        self.raw_slices.saturating_sub(self.result_slices)
    }
}
