use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataSet, FrameSequence, ScaleBounds};

use super::animation::{AnimationFrame, AnimationOptions, TracePayload};

/// Horizontal bar trace for one bar-race frame.
///
/// `x` carries the values in the fixed series order, `y` the series labels,
/// and `text` the outward bar labels with grouped thousands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub orientation: String,
    pub text: Vec<String>,
}

pub(super) fn build_bar_race_frames(
    sequence: &FrameSequence,
    dataset: &DataSet,
    options: AnimationOptions,
) -> (Vec<AnimationFrame>, Option<ScaleBounds>) {
    let frames = sequence
        .frames
        .iter()
        .map(|frame| {
            let values = match options.bar_top_n {
                Some(top_n) => keep_top_n(&frame.values, top_n),
                None => frame.values.clone(),
            };
            let text = values.iter().map(|value| format_grouped(*value)).collect();
            AnimationFrame {
                name: frame.label.clone(),
                trace: TracePayload::Bar(BarTrace {
                    x: values,
                    y: sequence.series.clone(),
                    orientation: "h".to_owned(),
                    text,
                }),
            }
        })
        .collect();

    // The axis range derives from the record values, not the zero-filled
    // frames, so an all-negative dataset does not inflate the maximum.
    let bounds = dataset
        .value_bounds()
        .map(|bounds| bounds.value_axis(options.bar_axis_headroom_ratio));

    (frames, bounds)
}

/// Zeroes every entry outside the N largest, keeping the vector length fixed
/// so the series alignment invariant holds. Ties keep the earlier series.
fn keep_top_n(values: &[f64], top_n: usize) -> Vec<f64> {
    if top_n >= values.len() {
        return values.to_vec();
    }

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&idx| Reverse(OrderedFloat(values[idx])));

    let mut kept = vec![0.0; values.len()];
    for &idx in order.iter().take(top_n) {
        kept[idx] = values[idx];
    }
    kept
}

/// Grouped-thousands label at integer precision: `1400.0` renders as
/// `"1,400"`, matching the renderer-side `,.0f` text template.
fn format_grouped(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
