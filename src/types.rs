use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One parsed CSV row, column name to cell value, in header order.
pub type Record = IndexMap<String, String>;

/// Where the input CSV files come from. Exactly one mode per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Explicit files, merged in the given order
    Files(Vec<Utf8PathBuf>),
    /// Every `*.csv` directly inside the directory, sorted by path
    Directory(Utf8PathBuf),
}

impl InputSource {
    pub fn describe(&self) -> String {
        match self {
            InputSource::Files(files) => format!("{} listed file(s)", files.len()),
            InputSource::Directory(dir) => dir.to_string(),
        }
    }
}

/// Result of loading a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded { path: Utf8PathBuf, records: usize },
    Failed { path: Utf8PathBuf, error: String },
}

impl LoadOutcome {
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            LoadOutcome::Loaded { path, .. } | LoadOutcome::Failed { path, .. } => path,
        }
    }

    pub fn records(&self) -> usize {
        match self {
            LoadOutcome::Loaded { records, .. } => *records,
            LoadOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed { .. })
    }
}

/// Counters collected across the pipeline stages.
///
/// `total_records == unique_records + duplicates + skipped_empty_key` always holds
/// once deduplication has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    pub files_resolved: usize,
    pub files_loaded: usize,
    pub files_failed: usize,
    pub total_records: usize,
    pub skipped_empty_key: usize,
    pub duplicates: usize,
    pub unique_records: usize,
}
