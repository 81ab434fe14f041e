//! chart-scale: axis scaling and tick generation for 2D charts.
//!
//! The crate turns a numeric value range and an available pixel length into
//! a readable set of evenly spaced ticks, and projects data values onto
//! pixel offsets through one of three axis strategies (step, auto-scaled,
//! fixed). Drawing is left to an [`render::AxisRenderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisKind, AxisOptions, ChartAxes, ChartData};
pub use error::{ChartError, ChartResult};
