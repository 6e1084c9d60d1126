use slicewise_core::timeseries::combine::combine_series_with;
use slicewise_core::{BoundsPolicy, CombineReport, Operation, SlicewiseError, TimeSeries};
use slicewise_types::SlicewiseConfig;

/// Orchestrator that combines series under a shared configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slicewise {
    pub(crate) cfg: SlicewiseConfig,
}

/// Builder for constructing a `Slicewise` orchestrator with custom configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlicewiseBuilder {
    cfg: SlicewiseConfig,
}

impl SlicewiseBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: result series use [`BoundsPolicy::Contained`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: SlicewiseConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one loaded through serde.
    #[must_use]
    pub const fn config(mut self, cfg: SlicewiseConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the bounds policy installed on result series.
    ///
    /// Behavior and trade-offs:
    /// - `Contained` guarantees every result slice lies inside the combined
    ///   window; inputs built under `Legacy` may then fail to combine.
    /// - `Legacy` replays the historical admission rule, so results can hold
    ///   the same early-starting slices their inputs did.
    #[must_use]
    pub const fn bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.cfg.bounds = bounds;
        self
    }

    /// Finish building.
    #[must_use]
    pub const fn build(self) -> Slicewise {
        Slicewise { cfg: self.cfg }
    }
}

impl Slicewise {
    /// Start building a new `Slicewise` instance.
    #[must_use]
    pub fn builder() -> SlicewiseBuilder {
        SlicewiseBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SlicewiseConfig {
        &self.cfg
    }

    /// Pointwise sum `left(t) + right(t)`.
    ///
    /// # Errors
    /// Returns an error only if a coalesced slice fails re-validation in the
    /// result series, which valid inputs under `Contained` never trigger.
    pub fn add(&self, left: &TimeSeries, right: &TimeSeries) -> Result<TimeSeries, SlicewiseError> {
        self.combine(Operation::Add, left, right)
    }

    /// Pointwise difference `left(t) - right(t)`; `left` is the minuend.
    ///
    /// # Errors
    /// See [`Slicewise::add`].
    pub fn subtract(
        &self,
        left: &TimeSeries,
        right: &TimeSeries,
    ) -> Result<TimeSeries, SlicewiseError> {
        self.combine(Operation::Subtract, left, right)
    }

    /// Combine two series under `op`.
    ///
    /// # Errors
    /// See [`Slicewise::add`].
    pub fn combine(
        &self,
        op: Operation,
        left: &TimeSeries,
        right: &TimeSeries,
    ) -> Result<TimeSeries, SlicewiseError> {
        self.combine_with_report(op, left, right)
            .map(|(series, _)| series)
    }

    /// Combine two series and report how many slices each stage produced.
    ///
    /// # Errors
    /// See [`Slicewise::add`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "slicewise::core::combine",
            skip(self, left, right),
            fields(
                operation = %op,
                bounds = ?self.cfg.bounds,
                left = left.len(),
                right = right.len(),
            ),
            err,
        )
    )]
    pub fn combine_with_report(
        &self,
        op: Operation,
        left: &TimeSeries,
        right: &TimeSeries,
    ) -> Result<(TimeSeries, CombineReport), SlicewiseError> {
        let out = combine_series_with(left, right, op, self.cfg.bounds)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            raw = out.1.raw_slices,
            result = out.1.result_slices,
            "combined series"
        );
        Ok(out)
    }
}
