//! Configuration types shared by the engine and the orchestrator.

use serde::{Deserialize, Serialize};

/// Rule deciding whether a slice fits inside a series window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BoundsPolicy {
    /// The slice must start no earlier than the window start and end no later
    /// than the window end. Slices touching either boundary are accepted.
    #[default]
    Contained,
    /// Operator-precedence reading of the historical check:
    /// `start == ws || (start > ws && end == we) || end < we`.
    ///
    /// Accepts some slices that begin before the window start (any slice
    /// ending strictly before the window end passes). Kept for callers that
    /// replay data validated under that rule.
    Legacy,
}

impl BoundsPolicy {
    /// Evaluate the policy for a slice `[start, end)` against the window
    /// `[window_start, window_end]`.
    #[must_use]
    pub fn admits<T: PartialOrd>(
        self,
        start: &T,
        end: &T,
        window_start: &T,
        window_end: &T,
    ) -> bool {
        match self {
            Self::Contained => start >= window_start && end <= window_end,
            Self::Legacy => {
                start == window_start
                    || (start > window_start && end == window_end)
                    || end < window_end
            }
        }
    }
}

/// Binary operator applied pointwise when combining two series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Operation {
    /// `A(t) + B(t)`.
    #[default]
    Add,
    /// `A(t) - B(t)`; the left series is the minuend.
    Subtract,
}

impl Operation {
    /// Combine a value of the left series with a value of the right series.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
        }
    }

    /// Value contributed by a right-series slice where the left series has no value.
    #[must_use]
    pub fn counterpart(self, right: f64) -> f64 {
        match self {
            Self::Add => right,
            Self::Subtract => -right,
        }
    }

    /// Short lowercase label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global configuration for the `Slicewise` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlicewiseConfig {
    /// Bounds rule installed on every result series built by the orchestrator.
    pub bounds: BoundsPolicy,
}
