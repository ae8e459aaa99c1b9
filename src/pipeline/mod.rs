//! The merge pipeline: resolve, load, deduplicate, write.
//!
//! Each stage hands its result to the next one; nothing is shared between
//! stages except the values passed along.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Config;
use crate::resolver;
use crate::types::{LoadOutcome, MergeStats};
use crate::utils::{ProgressTracker, Result};

pub mod dedup;
pub mod loader;
pub mod writer;

pub use dedup::{deduplicate, key_of, normalize_key, Deduplicated, UniqueRecords};
pub use loader::{has_key_column, load_all, read_csv_file, LoadedRecords};
pub use writer::{column_union, write_records};

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub stats: MergeStats,
    pub files: Vec<LoadOutcome>,
    pub output_bytes: u64,
    pub duration: Duration,
}

/// Run the whole merge described by `config`.
///
/// Fails before touching the output when the inputs cannot be resolved.
/// Unreadable input files are recorded in the outcome and do not fail the run.
pub fn run_merge(config: &Config, progress: &ProgressTracker) -> Result<MergeOutcome> {
    let start = Instant::now();
    config.validate()?;

    let files = resolver::resolve(&config.source)?;
    let loaded = load_all(&files, &config.key_field, progress);

    let mut stats = MergeStats {
        files_resolved: files.len(),
        files_failed: loaded.files_failed(),
        total_records: loaded.records.len(),
        ..MergeStats::default()
    };
    stats.files_loaded = stats.files_resolved - stats.files_failed;

    let LoadedRecords {
        records,
        columns,
        outcomes,
    } = loaded;
    let deduped = deduplicate(records, &config.key_field, config.case_insensitive);
    stats.skipped_empty_key = deduped.skipped_empty_key;
    stats.duplicates = deduped.duplicates;
    stats.unique_records = deduped.unique.len();

    let output_bytes = write_records(&config.output, deduped.unique.values(), &columns)?;

    let duration = start.elapsed();
    info!(
        "Merged {} record(s) into {} unique in {:.3}s",
        stats.total_records,
        stats.unique_records,
        duration.as_secs_f64()
    );

    Ok(MergeOutcome {
        stats,
        files: outcomes,
        output_bytes,
        duration,
    })
}
