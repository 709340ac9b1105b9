use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartKind, DataSet, ScaleBounds};
use crate::error::{VizError, VizResult};

use super::bar_race_trace_builder::{self, BarTrace};
use super::choropleth_trace_builder::{self, ChoroplethTrace};
use super::frame_builder::build_frames;
use super::pie_trace_builder::{self, PieTrace};

/// Presentation knobs for the per-kind trace builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    /// Donut hole ratio for pie frames, within `[0, 1)`.
    pub pie_hole_ratio: f64,
    /// Extra headroom above the bar-race value-axis maximum, so outward bar
    /// labels stay inside the plot area.
    pub bar_axis_headroom_ratio: f64,
    /// Keep only the N largest entries per bar-race frame; the rest are
    /// zeroed in place, preserving the fixed series alignment.
    pub bar_top_n: Option<usize>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            pie_hole_ratio: 0.3,
            bar_axis_headroom_ratio: 0.15,
            bar_top_n: None,
        }
    }
}

impl AnimationOptions {
    #[must_use]
    pub fn with_pie_hole_ratio(mut self, ratio: f64) -> Self {
        self.pie_hole_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_bar_axis_headroom_ratio(mut self, ratio: f64) -> Self {
        self.bar_axis_headroom_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_bar_top_n(mut self, top_n: usize) -> Self {
        self.bar_top_n = Some(top_n);
        self
    }

    fn validate(self) -> VizResult<()> {
        if !self.pie_hole_ratio.is_finite() || !(0.0..1.0).contains(&self.pie_hole_ratio) {
            return Err(VizError::InvalidData(
                "pie hole ratio must be within [0, 1)".to_owned(),
            ));
        }
        if !self.bar_axis_headroom_ratio.is_finite() || self.bar_axis_headroom_ratio < 0.0 {
            return Err(VizError::InvalidData(
                "bar axis headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One drawable trace payload in the external renderer's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TracePayload {
    Pie(PieTrace),
    Bar(BarTrace),
    Choropleth(ChoroplethTrace),
}

/// One animation step: the drawable payload tagged with its group-key label,
/// which doubles as the renderer's animation step identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub name: String,
    pub trace: TracePayload,
}

/// The full payload handed to the external play/pause/scrub control surface:
/// an initial frame, the labeled frame sequence, and fixed scale bounds
/// where the chart kind needs them (color scale for the choropleth, value
/// axis for the bar race, absent for pie).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub kind: ChartKind,
    pub series: Vec<String>,
    pub steps: Vec<String>,
    pub frames: Vec<AnimationFrame>,
    pub bounds: Option<ScaleBounds>,
}

impl AnimationSpec {
    /// The frame a renderer should draw before playback starts.
    #[must_use]
    pub fn initial_frame(&self) -> Option<&AnimationFrame> {
        self.frames.first()
    }

    /// An empty spec means "nothing to display" and is a normal caller-visible
    /// state, not a fault.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Builds the complete animation payload for a dataset.
///
/// Errors only on explicitly invalid `options`; malformed records never
/// reach this layer (they are dropped during dataset canonicalization).
pub fn build_animation(
    dataset: &DataSet,
    kind: ChartKind,
    options: AnimationOptions,
) -> VizResult<AnimationSpec> {
    options.validate()?;

    let sequence = build_frames(dataset, kind);
    let (frames, bounds) = match kind {
        ChartKind::Pie => (
            pie_trace_builder::build_pie_frames(&sequence, options.pie_hole_ratio),
            None,
        ),
        ChartKind::BarRace => {
            bar_race_trace_builder::build_bar_race_frames(&sequence, dataset, options)
        }
        ChartKind::Choropleth => choropleth_trace_builder::build_choropleth_frames(&sequence),
    };
    let steps = sequence
        .frames
        .iter()
        .map(|frame| frame.label.clone())
        .collect();

    debug!(kind = %kind, frame_count = sequence.len(), "built animation spec");

    Ok(AnimationSpec {
        kind,
        series: sequence.series,
        steps,
        frames,
        bounds,
    })
}
