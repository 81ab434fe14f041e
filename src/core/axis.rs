use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    AutoScale, AxisGeometry, AxisOrientation, FixedScale, HighLow, StepScale,
};
use crate::error::{ChartError, ChartResult};

/// Smallest room reserved for the label of the last tick.
pub const MIN_TRAILING_LABEL_LENGTH_PX: f64 = 30.0;

/// Raw value a tick stands for: a number on scaled axes, any label on step axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickValue {
    Number(f64),
    Label(String),
}

impl TickValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Label(_) => None,
        }
    }
}

impl fmt::Display for TickValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for TickValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TickValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for TickValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Turns a tick value and its index into label text. `None` hides the tick.
pub type LabelInterpolationFn =
    Arc<dyn Fn(&TickValue, usize) -> Option<String> + Send + Sync + 'static>;

/// Interpolation that prints the raw tick value.
#[must_use]
pub fn default_label_interpolation() -> LabelInterpolationFn {
    Arc::new(|value, _| Some(value.to_string()))
}

/// One tick ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub index: usize,
    pub value: TickValue,
    /// Pixel offset from the axis origin.
    pub offset: f64,
    /// Surface coordinate along the axis direction.
    pub position: f64,
    pub label: String,
    /// Room available to the label before the next tick.
    pub label_length: f64,
}

impl AxisTick {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.offset.is_finite() || !self.position.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "tick {} projected to a non-finite position",
                self.index
            )));
        }
        if !self.label_length.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "tick {} has a non-finite label length",
                self.index
            )));
        }
        Ok(())
    }
}

/// Maps a raw value and its ordinal position to a pixel offset from the
/// axis origin. Implementations are pure and deterministic.
pub trait ValueProjection {
    fn project_value(&self, value: f64, index: usize) -> f64;
}

/// Projection strategy of an axis, fixed when the axis is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AxisScale {
    Step(StepScale),
    AutoScale(AutoScale),
    FixedScale(FixedScale),
}

impl ValueProjection for AxisScale {
    fn project_value(&self, value: f64, index: usize) -> f64 {
        match self {
            Self::Step(scale) => scale.project_value(value, index),
            Self::AutoScale(scale) => scale.project_value(value, index),
            Self::FixedScale(scale) => scale.project_value(value, index),
        }
    }
}

/// Axis geometry plus the strategy projecting values onto it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    geometry: AxisGeometry,
    scale: AxisScale,
    show_label: bool,
    show_grid: bool,
}

impl Axis {
    /// Index-positioned axis over a fixed list of labels.
    pub fn step(geometry: AxisGeometry, labels: Vec<TickValue>, stretch: bool) -> ChartResult<Self> {
        geometry.validate()?;
        let scale = StepScale::new(geometry.axis_length, labels, stretch);
        Self::from_scale(geometry, AxisScale::Step(scale))
    }

    /// Axis whose ticks are snapped to a nice step for `high_low`.
    pub fn auto_scale(
        geometry: AxisGeometry,
        high_low: HighLow,
        scale_min_space: f64,
        only_integer: bool,
    ) -> ChartResult<Self> {
        geometry.validate()?;
        let scale = AutoScale::new(geometry.axis_length, high_low, scale_min_space, only_integer)?;
        Self::from_scale(geometry, AxisScale::AutoScale(scale))
    }

    /// Axis projecting against the raw `high_low` range, with either explicit
    /// ticks or `divisor` equal divisions.
    pub fn fixed_scale(
        geometry: AxisGeometry,
        high_low: HighLow,
        divisor: u32,
        ticks: Option<Vec<f64>>,
    ) -> ChartResult<Self> {
        geometry.validate()?;
        let scale = FixedScale::new(geometry.axis_length, high_low, divisor, ticks)?;
        Self::from_scale(geometry, AxisScale::FixedScale(scale))
    }

    fn from_scale(geometry: AxisGeometry, scale: AxisScale) -> ChartResult<Self> {
        debug!(
            orientation = ?geometry.orientation,
            axis_length = geometry.axis_length,
            "built axis"
        );
        Ok(Self {
            geometry,
            scale,
            show_label: true,
            show_grid: true,
        })
    }

    #[must_use]
    pub fn with_visibility(mut self, show_label: bool, show_grid: bool) -> Self {
        self.show_label = show_label;
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn geometry(&self) -> &AxisGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.geometry.orientation
    }

    #[must_use]
    pub fn counter_orientation(&self) -> AxisOrientation {
        self.geometry.orientation.counter()
    }

    #[must_use]
    pub fn axis_length(&self) -> f64 {
        self.geometry.axis_length
    }

    #[must_use]
    pub fn show_label(&self) -> bool {
        self.show_label
    }

    #[must_use]
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Raw tick values in ascending order (label order for step axes).
    #[must_use]
    pub fn tick_values(&self) -> Vec<TickValue> {
        match &self.scale {
            AxisScale::Step(scale) => scale.labels().to_vec(),
            AxisScale::AutoScale(scale) => scale
                .bounds()
                .values
                .iter()
                .copied()
                .map(TickValue::Number)
                .collect(),
            AxisScale::FixedScale(scale) => {
                scale.ticks().iter().copied().map(TickValue::Number).collect()
            }
        }
    }

    /// Pixel offset of `value` (at ordinal `index`) from the axis origin.
    #[must_use]
    pub fn project_value(&self, value: f64, index: usize) -> f64 {
        self.scale.project_value(value, index)
    }

    /// Surface coordinate of `value` along the axis direction.
    #[must_use]
    pub fn project_to_surface(&self, value: f64, index: usize) -> f64 {
        self.geometry.to_surface(self.project_value(value, index))
    }

    /// Enumerates ticks with their projected offsets and interpolated labels.
    ///
    /// Ticks whose interpolation yields `None` are skipped; they still count
    /// when measuring the label room of the tick before them.
    pub fn tick_labels(&self, interpolate: &LabelInterpolationFn) -> ChartResult<Vec<AxisTick>> {
        let values = self.tick_values();
        let offsets: Vec<f64> = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                self.project_value(value.as_number().unwrap_or(f64::NAN), index)
            })
            .collect();

        let mut ticks = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let offset = offsets[index];
            let label_length = match offsets.get(index + 1) {
                Some(next) => next - offset,
                None => (self.geometry.axis_length - offset).max(MIN_TRAILING_LABEL_LENGTH_PX),
            };

            let Some(label) = interpolate(&value, index) else {
                trace!(index, "label interpolation skipped tick");
                continue;
            };

            let tick = AxisTick {
                index,
                position: self.geometry.to_surface(offset),
                offset,
                label,
                label_length,
                value,
            };
            tick.validate()?;
            ticks.push(tick);
        }
        Ok(ticks)
    }
}
