mod frame;
mod null_renderer;

pub use frame::AxisFrame;
pub use null_renderer::NullRenderer;

use crate::core::{Axis, LabelInterpolationFn};
use crate::error::ChartResult;

/// Contract implemented by anything that draws axes.
///
/// Backends receive a fully materialized, validated `AxisFrame`: projected
/// tick positions and label text. Grid lines, label elements and observer
/// notification are the backend's business.
pub trait AxisRenderer {
    fn render_axis(&mut self, frame: &AxisFrame) -> ChartResult<()>;
}

/// Enumerates the ticks of `axis` and hands them to `renderer`.
pub fn render_axis<R: AxisRenderer + ?Sized>(
    renderer: &mut R,
    axis: &Axis,
    interpolate: &LabelInterpolationFn,
) -> ChartResult<()> {
    let frame = AxisFrame::from_axis(axis, interpolate)?;
    renderer.render_axis(&frame)
}
