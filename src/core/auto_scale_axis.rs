use serde::Serialize;

use crate::core::{Bounds, HighLow, ValueProjection, compute_bounds};
use crate::error::ChartResult;

/// Default minimum pixel distance between auto-scaled ticks.
pub const DEFAULT_SCALE_MIN_SPACE: f64 = 20.0;

/// Linear projection against a range snapped to a nice tick step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoScale {
    axis_length: f64,
    bounds: Bounds,
}

impl AutoScale {
    pub fn new(
        axis_length: f64,
        high_low: HighLow,
        scale_min_space: f64,
        only_integer: bool,
    ) -> ChartResult<Self> {
        let bounds = compute_bounds(axis_length, high_low, scale_min_space, only_integer)?;
        Ok(Self {
            axis_length,
            bounds,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Snapped `(min, max)` the projection maps onto `[0, axis_length]`.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.bounds.min, self.bounds.max)
    }
}

impl ValueProjection for AutoScale {
    fn project_value(&self, value: f64, _index: usize) -> f64 {
        self.axis_length * (value - self.bounds.min) / self.bounds.range
    }
}
