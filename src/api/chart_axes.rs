use serde::Serialize;
use tracing::debug;

use crate::core::{
    Axis, AxisGeometry, AxisOrientation, ChartRect, HighLow, LabelInterpolationFn, SeriesValue,
    TickValue, find_series_range,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisFrame, AxisRenderer, render_axis};

use super::{AxisKind, AxisOptions, ChartData};

/// The horizontal and vertical axis of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAxes {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Serialize)]
struct ChartAxesSnapshot {
    x: AxisFrame,
    y: AxisFrame,
}

impl ChartAxes {
    /// Builds both axes for `rect`. Step axes without explicit ticks use the
    /// chart labels; numeric axes scan the series in their own dimension.
    pub fn build(
        rect: ChartRect,
        data: &ChartData,
        x_options: &AxisOptions,
        y_options: &AxisOptions,
    ) -> ChartResult<Self> {
        let x = build_axis(rect, AxisOrientation::Horizontal, data, x_options)?;
        let y = build_axis(rect, AxisOrientation::Vertical, data, y_options)?;
        Ok(Self { x, y })
    }

    /// Hands the ticks of both axes to `renderer`, x axis first.
    pub fn render<R: AxisRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        interpolate: &LabelInterpolationFn,
    ) -> ChartResult<()> {
        render_axis(renderer, &self.x, interpolate)?;
        render_axis(renderer, &self.y, interpolate)
    }

    /// Pretty JSON of both axes' geometry and ticks, for diagnostics.
    pub fn snapshot_json_pretty(&self, interpolate: &LabelInterpolationFn) -> ChartResult<String> {
        let snapshot = ChartAxesSnapshot {
            x: AxisFrame::from_axis(&self.x, interpolate)?,
            y: AxisFrame::from_axis(&self.y, interpolate)?,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}

/// Builds the axis running along `orientation` from its options.
pub fn build_axis(
    rect: ChartRect,
    orientation: AxisOrientation,
    data: &ChartData,
    options: &AxisOptions,
) -> ChartResult<Axis> {
    let geometry = AxisGeometry::from_rect(rect, orientation)?;
    debug!(?orientation, kind = ?options.kind, "building axis from options");

    let axis = match options.kind {
        AxisKind::Step => {
            let labels = options
                .ticks
                .clone()
                .unwrap_or_else(|| data.labels.clone());
            Axis::step(geometry, labels, options.stretch)?
        }
        AxisKind::AutoScale => {
            let high_low = resolve_high_low(&data.series, orientation, options);
            Axis::auto_scale(
                geometry,
                high_low,
                options.scale_min_space,
                options.only_integer,
            )?
        }
        AxisKind::FixedScale => {
            let high_low = resolve_high_low(&data.series, orientation, options);
            let ticks = options
                .ticks
                .as_deref()
                .map(numeric_ticks)
                .transpose()?;
            Axis::fixed_scale(geometry, high_low, options.divisor, ticks)?
        }
    };

    Ok(axis.with_visibility(options.show_label, options.show_grid))
}

fn resolve_high_low(
    series: &[SeriesValue],
    orientation: AxisOrientation,
    options: &AxisOptions,
) -> HighLow {
    options.high_low.unwrap_or_else(|| {
        find_series_range(
            series,
            Some(orientation.dimension()),
            &options.range_options(),
        )
    })
}

fn numeric_ticks(ticks: &[TickValue]) -> ChartResult<Vec<f64>> {
    ticks
        .iter()
        .map(|tick| match tick {
            TickValue::Number(value) => Ok(*value),
            TickValue::Label(label) => label.trim().parse::<f64>().map_err(|_| {
                ChartError::InvalidData(format!("fixed scale tick `{label}` is not numeric"))
            }),
        })
        .collect()
}
