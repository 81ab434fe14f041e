use serde::Serialize;

use crate::core::{HighLow, ValueProjection};
use crate::error::{ChartError, ChartResult};

/// Linear projection against the raw, unsnapped range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedScale {
    axis_length: f64,
    min: f64,
    max: f64,
    ticks: Vec<f64>,
}

impl FixedScale {
    /// Uses `ticks` sorted ascending when given, otherwise `divisor + 1`
    /// evenly spaced ticks from `low` to `high`. A zero divisor counts as one.
    pub fn new(
        axis_length: f64,
        high_low: HighLow,
        divisor: u32,
        ticks: Option<Vec<f64>>,
    ) -> ChartResult<Self> {
        if !axis_length.is_finite() || axis_length <= 0.0 {
            return Err(ChartError::InvalidGeometry { axis_length });
        }
        let HighLow { high, low } = high_low;
        let span = high - low;
        if !high.is_finite() || !low.is_finite() || !span.is_finite() || span <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "fixed scale range must be finite and > 0 (high={high}, low={low})"
            )));
        }

        let ticks = match ticks {
            Some(mut ticks) => {
                if ticks.iter().any(|tick| !tick.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "fixed scale ticks must be finite".to_owned(),
                    ));
                }
                ticks.sort_by(f64::total_cmp);
                ticks
            }
            None => {
                let divisor = divisor.max(1);
                let division = span / f64::from(divisor);
                (0..=divisor)
                    .map(|index| low + division * f64::from(index))
                    .collect()
            }
        };

        Ok(Self {
            axis_length,
            min: low,
            max: high,
            ticks,
        })
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Raw `(min, max)` the projection maps onto `[0, axis_length]`.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl ValueProjection for FixedScale {
    fn project_value(&self, value: f64, _index: usize) -> f64 {
        self.axis_length * (value - self.min) / (self.max - self.min)
    }
}
