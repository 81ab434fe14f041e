use serde::Serialize;

use crate::core::{TickValue, ValueProjection};

/// Places ticks by ordinal position over a fixed list of labels.
///
/// Stretched axes put the last label on the far edge; otherwise every label
/// owns an equal slot starting at the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepScale {
    labels: Vec<TickValue>,
    step_length: f64,
    stretch: bool,
}

impl StepScale {
    #[must_use]
    pub fn new(axis_length: f64, labels: Vec<TickValue>, stretch: bool) -> Self {
        let divisions = labels.len().saturating_sub(usize::from(stretch)).max(1);
        Self {
            step_length: axis_length / divisions as f64,
            labels,
            stretch,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[TickValue] {
        &self.labels
    }

    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    #[must_use]
    pub fn is_stretched(&self) -> bool {
        self.stretch
    }
}

impl ValueProjection for StepScale {
    fn project_value(&self, _value: f64, index: usize) -> f64 {
        self.step_length * index as f64
    }
}
