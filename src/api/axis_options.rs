use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SCALE_MIN_SPACE, HighLow, RangeOptions, TickValue};
use crate::error::ChartResult;

/// Projection strategy requested for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Ordinal placement over labels.
    Step,
    /// Nice ticks snapped around the data range.
    #[default]
    AutoScale,
    /// Raw data range divided evenly or by explicit ticks.
    FixedScale,
}

/// Per-axis configuration.
///
/// Serializable so hosts can persist chart setup; every field has a default
/// so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(default)]
    pub kind: AxisKind,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default = "default_scale_min_space")]
    pub scale_min_space: f64,
    #[serde(default)]
    pub only_integer: bool,
    #[serde(default)]
    pub reference_value: Option<f64>,
    #[serde(default = "default_divisor")]
    pub divisor: u32,
    #[serde(default)]
    pub ticks: Option<Vec<TickValue>>,
    #[serde(default)]
    pub stretch: bool,
    /// Range used as-is instead of scanning the data.
    #[serde(default)]
    pub high_low: Option<HighLow>,
    #[serde(default = "default_true")]
    pub show_label: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self::new(AxisKind::default())
    }
}

impl AxisOptions {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            high: None,
            low: None,
            scale_min_space: default_scale_min_space(),
            only_integer: false,
            reference_value: None,
            divisor: default_divisor(),
            ticks: None,
            stretch: false,
            high_low: None,
            show_label: true,
            show_grid: true,
        }
    }

    /// Parses options from JSON, filling absent fields with defaults.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_high(mut self, high: f64) -> Self {
        self.high = Some(high);
        self
    }

    #[must_use]
    pub fn with_low(mut self, low: f64) -> Self {
        self.low = Some(low);
        self
    }

    #[must_use]
    pub fn with_scale_min_space(mut self, scale_min_space: f64) -> Self {
        self.scale_min_space = scale_min_space;
        self
    }

    #[must_use]
    pub fn with_only_integer(mut self, only_integer: bool) -> Self {
        self.only_integer = only_integer;
        self
    }

    #[must_use]
    pub fn with_reference_value(mut self, reference_value: f64) -> Self {
        self.reference_value = Some(reference_value);
        self
    }

    #[must_use]
    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divisor = divisor;
        self
    }

    #[must_use]
    pub fn with_ticks<T: Into<TickValue>>(mut self, ticks: impl IntoIterator<Item = T>) -> Self {
        self.ticks = Some(ticks.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    #[must_use]
    pub fn with_high_low(mut self, high_low: HighLow) -> Self {
        self.high_low = Some(high_low);
        self
    }

    #[must_use]
    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    #[must_use]
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn range_options(&self) -> RangeOptions {
        RangeOptions {
            high: self.high,
            low: self.low,
            reference_value: self.reference_value,
        }
    }
}

fn default_scale_min_space() -> f64 {
    DEFAULT_SCALE_MIN_SPACE
}

fn default_divisor() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
