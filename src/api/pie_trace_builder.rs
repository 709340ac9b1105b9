use serde::{Deserialize, Serialize};

use crate::core::FrameSequence;

use super::animation::{AnimationFrame, TracePayload};

/// Donut trace for one pie frame.
///
/// Each pie frame normalizes to 100% on its own, so no global bounds apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hole: f64,
}

pub(super) fn build_pie_frames(sequence: &FrameSequence, hole_ratio: f64) -> Vec<AnimationFrame> {
    sequence
        .frames
        .iter()
        .map(|frame| AnimationFrame {
            name: frame.label.clone(),
            trace: TracePayload::Pie(PieTrace {
                labels: sequence.series.clone(),
                values: frame.values.clone(),
                hole: hole_ratio,
            }),
        })
        .collect()
}
