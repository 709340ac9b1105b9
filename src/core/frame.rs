use serde::{Deserialize, Serialize};

use crate::core::bounds::ScaleBounds;
use crate::core::chart_kind::ChartKind;

/// One animation step: the group-key label plus the values to draw at that
/// step, aligned with the owning sequence's fixed series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub label: String,
    pub values: Vec<f64>,
}

/// The ordered frames for one dataset.
///
/// Invariants:
/// - one frame per distinct group key, in ascending group-key order
/// - every frame's value vector has exactly `series.len()` entries; a
///   (group, series) pair absent from the dataset contributes `0.0`
/// - `bounds`, when present, are global over the whole dataset and shared by
///   every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSequence {
    pub kind: ChartKind,
    pub series: Vec<String>,
    pub frames: Vec<Frame>,
    pub bounds: Option<ScaleBounds>,
}

impl FrameSequence {
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// An empty sequence means "nothing to render"; it is a normal state for
    /// the caller to surface, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame a renderer should draw before playback starts.
    #[must_use]
    pub fn initial_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }
}
