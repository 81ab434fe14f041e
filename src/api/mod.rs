mod axis_options;
mod chart_axes;
mod chart_data;

pub use axis_options::{AxisKind, AxisOptions};
pub use chart_axes::{ChartAxes, build_axis};
pub use chart_data::ChartData;
