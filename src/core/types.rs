use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Raw value range of one axis for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

impl HighLow {
    #[must_use]
    pub fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }
}

/// Drawing rectangle of a chart in surface coordinates.
///
/// `y1` is the bottom edge and `y2` the top edge, so vertical offsets grow
/// upwards from `y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ChartRect {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Builds the drawing rectangle of a `width` x `height` surface after
    /// removing uniform padding on every side.
    #[must_use]
    pub fn from_size_with_padding(width: f64, height: f64, padding: f64) -> Self {
        Self {
            x1: padding,
            y1: height - padding,
            x2: width - padding,
            y2: padding,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y2
    }
}

/// Direction an axis runs along on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

impl AxisOrientation {
    /// Orientation of the axis that crosses this one.
    #[must_use]
    pub fn counter(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Data dimension projected along this orientation.
    #[must_use]
    pub fn dimension(self) -> AxisDimension {
        match self {
            Self::Horizontal => AxisDimension::X,
            Self::Vertical => AxisDimension::Y,
        }
    }

    #[must_use]
    pub fn length_in(self, rect: ChartRect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Counter-axis edge grid lines start from.
    #[must_use]
    pub fn grid_offset_in(self, rect: ChartRect) -> f64 {
        match self {
            Self::Horizontal => rect.y2,
            Self::Vertical => rect.x1,
        }
    }

    /// Converts an offset from the axis origin into a surface coordinate.
    #[must_use]
    pub fn to_surface(self, rect: ChartRect, offset: f64) -> f64 {
        match self {
            Self::Horizontal => rect.x1 + offset,
            Self::Vertical => rect.y1 - offset,
        }
    }
}

/// Coordinate of a data point an axis reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisDimension {
    X,
    Y,
}

/// Read-only placement of one axis inside the drawing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub axis_length: f64,
    pub grid_offset: f64,
    pub orientation: AxisOrientation,
    /// Length of the counter axis, i.e. how long a grid line is.
    pub counter_length: f64,
    pub rect: ChartRect,
}

impl AxisGeometry {
    /// Derives the geometry of the axis running along `orientation`.
    pub fn from_rect(rect: ChartRect, orientation: AxisOrientation) -> ChartResult<Self> {
        let geometry = Self {
            axis_length: orientation.length_in(rect),
            grid_offset: orientation.grid_offset_in(rect),
            orientation,
            counter_length: orientation.counter().length_in(rect),
            rect,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.axis_length.is_finite() || self.axis_length <= 0.0 {
            return Err(ChartError::InvalidGeometry {
                axis_length: self.axis_length,
            });
        }
        if !self.grid_offset.is_finite() || !self.counter_length.is_finite() {
            return Err(ChartError::InvalidData(
                "axis grid offset and counter length must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_surface(&self, offset: f64) -> f64 {
        self.orientation.to_surface(self.rect, offset)
    }
}
