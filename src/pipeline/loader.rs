use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::types::{LoadOutcome, Record};
use crate::utils::{MergeError, ProgressTracker, Result};

/// Everything the loading stage produced, in input order.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    /// Union of the header columns of every file that loaded, first seen first
    pub columns: Vec<String>,
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadedRecords {
    pub fn files_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

/// Load every file in order. A file that fails to parse contributes no
/// records; the failure is logged and kept in `outcomes`.
pub fn load_all(
    files: &[Utf8PathBuf],
    key_field: &str,
    progress: &ProgressTracker,
) -> LoadedRecords {
    let bar = progress.create_progress_bar(files.len() as u64, "Loading");
    let mut columns: IndexSet<String> = IndexSet::new();
    let mut loaded = LoadedRecords::default();

    for path in files {
        bar.set_message(path.to_string());
        match read_csv_file(path) {
            Ok((headers, records)) => {
                info!("Loaded {} record(s) from {}", records.len(), path);
                if !has_key_column(&headers, key_field) {
                    warn!(
                        "{} has no '{}' column; its {} record(s) will be skipped",
                        path,
                        key_field,
                        records.len()
                    );
                }
                columns.extend(headers);
                loaded.outcomes.push(LoadOutcome::Loaded {
                    path: path.clone(),
                    records: records.len(),
                });
                loaded.records.extend(records);
            }
            Err(err) => {
                warn!("{err}; skipping file");
                let error = match &err {
                    MergeError::FileRead { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                loaded.outcomes.push(LoadOutcome::Failed {
                    path: path.clone(),
                    error,
                });
            }
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    loaded.columns = columns.into_iter().collect();
    info!(
        "Loaded {} record(s) from {} file(s), {} failed",
        loaded.records.len(),
        files.len() - loaded.files_failed(),
        loaded.files_failed()
    );
    loaded
}

/// Whether `headers` contains `key_field` exactly (column names are case-sensitive).
pub fn has_key_column(headers: &[String], key_field: &str) -> bool {
    headers.iter().any(|h| h == key_field)
}

/// Parse one CSV file into its header and its records. All or nothing.
pub fn read_csv_file(path: &Utf8Path) -> Result<(Vec<String>, Vec<Record>)> {
    let read_error = |source: csv::Error| MergeError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(read_error)?;
        let mut record = Record::with_capacity(headers.len());
        for (column, value) in headers.iter().zip(row.iter()) {
            // repeated header names keep the first cell
            record
                .entry(column.clone())
                .or_insert_with(|| value.to_string());
        }
        records.push(record);
    }

    debug!("{}: {} column(s), {} row(s)", path, headers.len(), records.len());
    Ok((headers, records))
}
