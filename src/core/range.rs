use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisDimension, HighLow};

/// Explicit overrides applied while resolving an axis range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeOptions {
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    /// Value the resolved range must always contain, e.g. a zero baseline.
    #[serde(default)]
    pub reference_value: Option<f64>,
}

impl RangeOptions {
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
    pub fn with_reference_value(mut self, reference_value: f64) -> Self {
        self.reference_value = Some(reference_value);
        self
    }
}

/// One node of ingested series data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSeriesValue", into = "RawSeriesValue")]
pub enum SeriesValue {
    Scalar(f64),
    Point { x: Option<f64>, y: Option<f64> },
    Series(Vec<SeriesValue>),
    Missing,
}

impl SeriesValue {
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Builds a series node from bare numbers.
    #[must_use]
    pub fn series_of(values: &[f64]) -> Self {
        Self::Series(values.iter().copied().map(Self::Scalar).collect())
    }

    /// Value this node contributes to `dimension`, if it is a leaf.
    ///
    /// Bare scalars belong to the value (`Y`) dimension and to dimension-less
    /// scans; points only ever contribute their requested coordinate.
    #[must_use]
    pub fn value_in(&self, dimension: Option<AxisDimension>) -> Option<f64> {
        match (self, dimension) {
            (Self::Scalar(value), None | Some(AxisDimension::Y)) => Some(*value),
            (Self::Point { x, .. }, Some(AxisDimension::X)) => *x,
            (Self::Point { y, .. }, Some(AxisDimension::Y)) => *y,
            _ => None,
        }
    }

    /// Flattens the tree into the finite values it holds for `dimension`.
    #[must_use]
    pub fn flatten(&self, dimension: Option<AxisDimension>) -> Vec<f64> {
        let mut values = Vec::new();
        self.collect_into(dimension, &mut values);
        values
    }

    fn collect_into(&self, dimension: Option<AxisDimension>, out: &mut Vec<f64>) {
        if let Self::Series(items) = self {
            for item in items {
                item.collect_into(dimension, out);
            }
            return;
        }
        if let Some(value) = self.value_in(dimension).filter(|value| value.is_finite()) {
            out.push(value);
        }
    }
}

/// Wire shapes accepted for series values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSeriesValue {
    Number(f64),
    Text(String),
    List(Vec<RawSeriesValue>),
    Nested { data: Vec<RawSeriesValue> },
    Wrapped { value: Box<RawSeriesValue> },
    Point {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<f64>,
    },
    Null,
}

impl From<RawSeriesValue> for SeriesValue {
    fn from(raw: RawSeriesValue) -> Self {
        match raw {
            RawSeriesValue::Number(value) => Self::Scalar(value),
            RawSeriesValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_or(Self::Missing, Self::Scalar),
            RawSeriesValue::List(items) | RawSeriesValue::Nested { data: items } => {
                Self::Series(items.into_iter().map(Self::from).collect())
            }
            RawSeriesValue::Wrapped { value } => Self::from(*value),
            RawSeriesValue::Point { x, y } => Self::Point { x, y },
            RawSeriesValue::Null => Self::Missing,
        }
    }
}

impl From<SeriesValue> for RawSeriesValue {
    fn from(value: SeriesValue) -> Self {
        match value {
            SeriesValue::Scalar(value) if value.is_finite() => Self::Number(value),
            SeriesValue::Scalar(_) | SeriesValue::Missing => Self::Null,
            SeriesValue::Point { x, y } => Self::Point { x, y },
            SeriesValue::Series(items) => Self::List(items.into_iter().map(Self::from).collect()),
        }
    }
}

/// Resolves the `{high, low}` range of a flat value sequence.
///
/// Explicit bounds win over scanned ones; non-finite values are holes. The
/// reference value, when present, is always inside the result. Zero-width
/// and inverted ranges are widened so that `high > low` holds afterwards.
#[must_use]
pub fn find_range(values: &[f64], options: &RangeOptions) -> HighLow {
    let mut high = options.high.unwrap_or(-f64::MAX);
    let mut low = options.low.unwrap_or(f64::MAX);
    let find_high = options.high.is_none();
    let find_low = options.low.is_none();

    if find_high || find_low {
        for &value in values.iter().filter(|value| value.is_finite()) {
            if find_high && value > high {
                high = value;
            }
            if find_low && value < low {
                low = value;
            }
        }
    }

    if let Some(reference) = options.reference_value.filter(|value| value.is_finite()) {
        high = high.max(reference);
        low = low.min(reference);
    }

    if high <= low {
        let corrected = if low == 0.0 {
            HighLow::new(1.0, low)
        } else if low < 0.0 {
            HighLow::new(0.0, low)
        } else if high > 0.0 {
            HighLow::new(high, 0.0)
        } else {
            HighLow::new(1.0, 0.0)
        };
        debug!(
            high,
            low,
            corrected_high = corrected.high,
            corrected_low = corrected.low,
            "corrected degenerate axis range"
        );
        return corrected;
    }

    HighLow::new(high, low)
}

/// Flattens `data` for `dimension` and resolves its range.
#[must_use]
pub fn find_series_range(
    data: &[SeriesValue],
    dimension: Option<AxisDimension>,
    options: &RangeOptions,
) -> HighLow {
    let values: Vec<f64> = data
        .iter()
        .flat_map(|series| series.flatten(dimension))
        .collect();
    find_range(&values, options)
}
