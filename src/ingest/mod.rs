pub mod csv_source;
pub mod field_map;

pub use csv_source::{read_records, read_records_from_path, read_records_from_str};
pub use field_map::{ColumnIndices, FieldTable, field_table, normalize_header, resolve_columns};
