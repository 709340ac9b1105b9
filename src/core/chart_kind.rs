use std::fmt;

use serde::{Deserialize, Serialize};

/// The supported animated chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    BarRace,
    Choropleth,
}

impl ChartKind {
    /// Returns `true` for kinds whose visual scale must stay fixed across
    /// frames, requiring global (min, max) bounds over the whole dataset.
    ///
    /// Pie frames normalize to 100% independently and the bar race derives
    /// its value axis separately, so only the choropleth qualifies.
    #[must_use]
    pub fn uses_global_scale(self) -> bool {
        matches!(self, ChartKind::Choropleth)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::BarRace => "bar_race",
            ChartKind::Choropleth => "choropleth",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
