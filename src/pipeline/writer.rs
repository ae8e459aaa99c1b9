use std::fs;

use camino::Utf8Path;
use indexmap::IndexSet;
use tracing::info;

use crate::types::Record;
use crate::utils::{MergeError, Result};

/// Columns of `records`, each in the position it was first seen.
pub fn column_union<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut columns: IndexSet<&str> = IndexSet::new();
    for record in records {
        columns.extend(record.keys().map(String::as_str));
    }
    columns.into_iter().map(str::to_string).collect()
}

/// Write `records` to `path` as CSV, replacing any existing file.
///
/// The header is the column union of `records`; a record missing a column gets
/// an empty cell. With no records, `fallback_columns` becomes the header.
/// Returns the size of the written file in bytes.
pub fn write_records<'a, I>(path: &Utf8Path, records: I, fallback_columns: &[String]) -> Result<u64>
where
    I: IntoIterator<Item = &'a Record> + Clone,
{
    let write_error = |source: csv::Error| MergeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut columns = column_union(records.clone());
    if columns.is_empty() {
        columns = fallback_columns.to_vec();
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(e.into()))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
    if !columns.is_empty() {
        writer.write_record(&columns).map_err(write_error)?;
    }

    let mut written = 0usize;
    for record in records {
        let row = columns
            .iter()
            .map(|column| record.get(column).map(String::as_str).unwrap_or(""));
        writer.write_record(row).map_err(write_error)?;
        written += 1;
    }
    writer.flush().map_err(|e| write_error(e.into()))?;
    drop(writer);

    let bytes = fs::metadata(path)
        .map_err(|e| write_error(e.into()))?
        .len();
    info!("Wrote {} record(s) with {} column(s) to {}", written, columns.len(), path);
    Ok(bytes)
}
