// Primitives for reading delimited text into chart records.

use std::io::Read;
use std::path::Path;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ChartKind, Record};
use crate::error::VizResult;

use super::field_map::{ColumnIndices, normalize_header, resolve_columns};

/// Reads delimited text with a header row into chart records.
///
/// Mirrors the loose ingestion contract of spreadsheet-style input:
/// numeric-looking value fields are coerced, keys are trimmed, region codes
/// are upper-cased for choropleth data, and any row that cannot be mapped to
/// all three required fields is dropped. Only file-level failures
/// (unreadable input, unresolvable header) surface as errors.
pub fn read_records<R: Read>(reader: R, kind: ChartKind) -> VizResult<Vec<Record>> {
    collect_records(reader_builder().from_reader(reader), kind)
}

/// Opens and reads a delimited-text file, see [`read_records`].
pub fn read_records_from_path(path: impl AsRef<Path>, kind: ChartKind) -> VizResult<Vec<Record>> {
    collect_records(reader_builder().from_path(path)?, kind)
}

/// Reads records from in-memory delimited text, see [`read_records`].
pub fn read_records_from_str(input: &str, kind: ChartKind) -> VizResult<Vec<Record>> {
    read_records(input.as_bytes(), kind)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>, kind: ChartKind) -> VizResult<Vec<Record>> {
    let headers: SmallVec<[String; 8]> = reader.headers()?.iter().map(normalize_header).collect();
    let columns = resolve_columns(&headers, kind)?;

    let mut records = Vec::new();
    let mut dropped_count = 0_usize;
    for row in reader.records() {
        let Ok(row) = row else {
            dropped_count += 1;
            continue;
        };
        match record_from_row(&row, columns, kind) {
            Some(record) => records.push(record),
            None => dropped_count += 1,
        }
    }

    if dropped_count > 0 {
        debug!(
            dropped_count,
            parsed_count = records.len(),
            kind = %kind,
            "dropped malformed rows during ingestion"
        );
    }
    Ok(records)
}

fn record_from_row(
    row: &csv::StringRecord,
    columns: ColumnIndices,
    kind: ChartKind,
) -> Option<Record> {
    let group = row.get(columns.group)?.trim();
    let series = row.get(columns.series)?.trim();
    let value: f64 = row.get(columns.value)?.trim().parse().ok()?;

    if group.is_empty() || series.is_empty() || !value.is_finite() {
        return None;
    }

    let series = if kind == ChartKind::Choropleth {
        series.to_ascii_uppercase()
    } else {
        series.to_owned()
    };

    Some(Record::new(group, series, value))
}
