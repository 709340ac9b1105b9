use serde::{Deserialize, Serialize};

/// One observation in a chart dataset.
///
/// `group` is the axis value that defines one animation frame (year, month),
/// `series` is the dimension broken out within a frame (category, region
/// code), and `value` is the plotted quantity. Field names differ per chart
/// kind at the ingestion boundary but the in-memory shape is uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub group: String,
    pub series: String,
    pub value: f64,
}

impl Record {
    #[must_use]
    pub fn new(group: impl Into<String>, series: impl Into<String>, value: f64) -> Self {
        Self {
            group: group.into(),
            series: series.into(),
            value,
        }
    }

    /// Returns `true` when the record can participate in frame construction:
    /// finite value, non-empty group and series keys.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.value.is_finite() && !self.group.is_empty() && !self.series.is_empty()
    }
}
