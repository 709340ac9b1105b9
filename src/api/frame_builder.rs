use indexmap::IndexMap;
use tracing::debug;

#[cfg(feature = "parallel-build")]
use rayon::prelude::*;

use crate::core::{ChartKind, DataSet, Frame, FrameSequence};

/// Builds the ordered frame sequence for a dataset.
///
/// One frame per distinct group key, in ascending group-key order. Within
/// each frame the values follow the dataset-wide sorted series order, with
/// `0.0` substituted for (group, series) pairs absent from the dataset.
/// Scale-dependent kinds additionally carry global (min, max) bounds over
/// all record values so the visual scale stays fixed across frames.
///
/// The function is pure and deterministic: rebuilding from the same dataset
/// yields bit-identical output, and an empty canonical dataset yields an
/// empty sequence ("nothing to render"), never an error.
#[must_use]
pub fn build_frames(dataset: &DataSet, kind: ChartKind) -> FrameSequence {
    let groups = dataset.groups();
    let series = dataset.series();

    let mut by_group: IndexMap<&str, IndexMap<&str, f64>> = IndexMap::new();
    for record in dataset.records() {
        by_group
            .entry(record.group.as_str())
            .or_default()
            .insert(record.series.as_str(), record.value);
    }

    let build_one = |group: &String| -> Frame {
        let cells = by_group.get(group.as_str());
        let values = series
            .iter()
            .map(|key| {
                cells
                    .and_then(|cells| cells.get(key.as_str()).copied())
                    .unwrap_or(0.0)
            })
            .collect();
        Frame {
            label: group.clone(),
            values,
        }
    };

    // The parallel path maps over the sorted group list with indexed
    // collection, so frame order matches the sequential path exactly.
    #[cfg(feature = "parallel-build")]
    let frames: Vec<Frame> = groups.par_iter().map(build_one).collect();

    #[cfg(not(feature = "parallel-build"))]
    let frames: Vec<Frame> = groups.iter().map(build_one).collect();

    let bounds = if kind.uses_global_scale() {
        dataset.value_bounds()
    } else {
        None
    };

    debug!(
        kind = %kind,
        frame_count = frames.len(),
        series_count = series.len(),
        "built frame sequence"
    );

    FrameSequence {
        kind,
        series,
        frames,
        bounds,
    }
}
