use tracing::{debug, warn};

use crate::core::bounds::ScaleBounds;
use crate::core::record::Record;

/// Owns the record set backing the current view.
///
/// The set is replaced wholesale whenever new input arrives (sample data or a
/// fresh upload); it is never merged incrementally. Every replacement runs
/// through canonicalization, so consumers always observe a sorted,
/// deduplicated set of valid records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    records: Vec<Record>,
}

impl DataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from raw records, canonicalizing on the way in.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut dataset = Self::new();
        dataset.replace(records);
        dataset
    }

    /// Replaces the whole record set. The previous records are discarded.
    pub fn replace(&mut self, records: Vec<Record>) {
        let original_count = records.len();
        let records = canonicalize_records(records);
        debug!(
            original_count,
            canonical_count = records.len(),
            "replace record set"
        );
        self.records = records;
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct group keys in ascending lexicographic order.
    ///
    /// Lexicographic order coincides with chronological order only for
    /// zero-padded fixed-width labels such as `2024-01`; free-form date
    /// strings sort as plain text.
    #[must_use]
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self
            .records
            .iter()
            .map(|record| record.group.clone())
            .collect();
        groups.sort();
        groups.dedup();
        groups
    }

    /// Distinct series keys in ascending lexicographic order. This is the
    /// fixed series order applied to every frame built from this dataset.
    #[must_use]
    pub fn series(&self) -> Vec<String> {
        let mut series: Vec<String> = self
            .records
            .iter()
            .map(|record| record.series.clone())
            .collect();
        series.sort();
        series.dedup();
        series
    }

    /// Global (min, max) over all record values, or `None` for an empty set.
    #[must_use]
    pub fn value_bounds(&self) -> Option<ScaleBounds> {
        ScaleBounds::from_values(self.records.iter().map(|record| record.value))
    }
}

fn canonicalize_records(mut records: Vec<Record>) -> Vec<Record> {
    let original_len = records.len();
    records.retain(Record::is_valid);
    records.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then_with(|| a.series.cmp(&b.series))
    });

    let mut deduped: Vec<Record> = Vec::with_capacity(records.len());
    let mut duplicate_count = 0_usize;
    for record in records {
        if let Some(last) = deduped.last_mut() {
            if record.group == last.group && record.series == last.series {
                *last = record;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(record);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized records on replace"
        );
    }
    deduped
}
