pub mod auto_scale_axis;
pub mod axis;
pub mod bounds;
pub mod fixed_scale_axis;
pub mod range;
pub mod step_axis;
pub mod types;

pub use auto_scale_axis::{AutoScale, DEFAULT_SCALE_MIN_SPACE};
pub use axis::{
    Axis, AxisScale, AxisTick, LabelInterpolationFn, TickValue, ValueProjection,
    default_label_interpolation,
};
pub use bounds::{Bounds, compute_bounds};
pub use fixed_scale_axis::FixedScale;
pub use range::{RangeOptions, SeriesValue, find_range, find_series_range};
pub use step_axis::StepScale;
pub use types::{AxisDimension, AxisGeometry, AxisOrientation, ChartRect, HighLow};
