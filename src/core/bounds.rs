use serde::{Deserialize, Serialize};

/// Fixed (min, max) value pair used to keep a visual scale stable across
/// animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    /// Folds an iterator of values into global bounds, ignoring non-finite
    /// entries. Returns `None` when no finite value remains.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter().filter(|value| value.is_finite());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        Some(Self { min, max })
    }

    /// Returns a zero-anchored value-axis range with proportional headroom
    /// above the maximum, so outward bar labels stay inside the plot area.
    #[must_use]
    pub fn value_axis(self, headroom_ratio: f64) -> Self {
        Self {
            min: 0.0_f64.min(self.min),
            max: self.max.max(0.0) * (1.0 + headroom_ratio),
        }
    }
}
