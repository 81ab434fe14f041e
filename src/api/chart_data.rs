use serde::{Deserialize, Serialize};

use crate::core::{SeriesValue, TickValue};
use crate::error::ChartResult;

/// Labels and series of one chart, already normalized into `SeriesValue`s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<TickValue>,
    #[serde(default)]
    pub series: Vec<SeriesValue>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<TickValue>, series: Vec<SeriesValue>) -> Self {
        Self { labels, series }
    }

    /// Parses `{"labels": [...], "series": [...]}`.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesValue) -> Self {
        self.series.push(series);
        self
    }
}
