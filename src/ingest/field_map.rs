use crate::core::ChartKind;
use crate::error::{VizError, VizResult};

/// Accepted header names for the three required columns of one chart kind.
///
/// Each list is ordered by priority: the first synonym found among the
/// normalized headers wins. The table is enumerated explicitly so ingestion
/// never falls back to ad hoc dynamic key access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTable {
    pub group: &'static [&'static str],
    pub series: &'static [&'static str],
    pub value: &'static [&'static str],
}

#[must_use]
pub fn field_table(kind: ChartKind) -> FieldTable {
    match kind {
        ChartKind::Pie => FieldTable {
            group: &["year", "fiscal_year", "yr"],
            series: &["category"],
            value: &["amount", "value"],
        },
        ChartKind::BarRace => FieldTable {
            group: &["time", "year", "yr"],
            series: &["category"],
            value: &["value", "amount"],
        },
        ChartKind::Choropleth => FieldTable {
            group: &["year", "fiscal_year", "yr"],
            series: &["abbr", "state_abbr", "statecode"],
            value: &["value", "median_income", "income"],
        },
    }
}

/// Canonical header form: lower-cased and trimmed.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolved positions of the three required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub group: usize,
    pub series: usize,
    pub value: usize,
}

/// Maps normalized headers to column positions for a chart kind.
///
/// A header row missing any required column is the one ingestion failure
/// besides unreadable input that surfaces as an error.
pub fn resolve_columns(headers: &[String], kind: ChartKind) -> VizResult<ColumnIndices> {
    let table = field_table(kind);
    Ok(ColumnIndices {
        group: find_column(headers, table.group, kind)?,
        series: find_column(headers, table.series, kind)?,
        value: find_column(headers, table.value, kind)?,
    })
}

fn find_column(
    headers: &[String],
    synonyms: &'static [&'static str],
    kind: ChartKind,
) -> VizResult<usize> {
    for &synonym in synonyms {
        if let Some(idx) = headers.iter().position(|header| header.as_str() == synonym) {
            return Ok(idx);
        }
    }
    Err(VizError::MissingColumn {
        kind: kind.as_str(),
        field: synonyms[0],
        accepted: synonyms.join(", "),
    })
}
