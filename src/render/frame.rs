use serde::Serialize;

use crate::core::{Axis, AxisOrientation, AxisTick, LabelInterpolationFn};
use crate::error::{ChartError, ChartResult};

/// Backend-agnostic tick listing for one axis in one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisFrame {
    pub orientation: AxisOrientation,
    pub axis_length: f64,
    pub grid_offset: f64,
    pub counter_length: f64,
    pub show_label: bool,
    pub show_grid: bool,
    pub ticks: Vec<AxisTick>,
}

impl AxisFrame {
    /// Materializes the ticks of `axis`. An axis with neither labels nor grid
    /// lines produces an empty frame without running the interpolation.
    pub fn from_axis(axis: &Axis, interpolate: &LabelInterpolationFn) -> ChartResult<Self> {
        let geometry = axis.geometry();
        let ticks = if axis.show_label() || axis.show_grid() {
            axis.tick_labels(interpolate)?
        } else {
            Vec::new()
        };
        Ok(Self {
            orientation: geometry.orientation,
            axis_length: geometry.axis_length,
            grid_offset: geometry.grid_offset,
            counter_length: geometry.counter_length,
            show_label: axis.show_label(),
            show_grid: axis.show_grid(),
            ticks,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.axis_length.is_finite() || self.axis_length <= 0.0 {
            return Err(ChartError::InvalidGeometry {
                axis_length: self.axis_length,
            });
        }
        for tick in &self.ticks {
            tick.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
