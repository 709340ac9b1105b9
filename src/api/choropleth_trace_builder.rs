use serde::{Deserialize, Serialize};

use crate::core::{FrameSequence, ScaleBounds};

use super::animation::{AnimationFrame, TracePayload};

const LOCATION_MODE_USA_STATES: &str = "USA-states";

/// Choropleth trace for one map frame.
///
/// `locations` carries the fixed sorted region codes, `z` the series-aligned
/// values, and `zmin`/`zmax` the dataset-global bounds so the color scale
/// does not jump between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub locationmode: String,
    pub zmin: f64,
    pub zmax: f64,
}

pub(super) fn build_choropleth_frames(
    sequence: &FrameSequence,
) -> (Vec<AnimationFrame>, Option<ScaleBounds>) {
    let bounds = sequence.bounds;
    let frames = sequence
        .frames
        .iter()
        .map(|frame| {
            // A non-empty sequence always carries bounds for this kind; the
            // fallback never renders because an empty sequence has no frames.
            let (zmin, zmax) = bounds.map_or((0.0, 0.0), |bounds| (bounds.min, bounds.max));
            AnimationFrame {
                name: frame.label.clone(),
                trace: TracePayload::Choropleth(ChoroplethTrace {
                    locations: sequence.series.clone(),
                    z: frame.values.clone(),
                    locationmode: LOCATION_MODE_USA_STATES.to_owned(),
                    zmin,
                    zmax,
                }),
            }
        })
        .collect();
    (frames, bounds)
}
