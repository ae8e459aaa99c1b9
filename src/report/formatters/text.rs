//! Text formatter for human-readable console output

use anyhow::Result;
use bytesize::ByteSize;
use std::fmt::Write;

use crate::report::MergeReport;
use crate::types::{InputSource, LoadOutcome};

/// Format a merge report as human-readable text
pub fn format_report(report: &MergeReport) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "═══════════════════════════════════════")?;
    writeln!(output, "              MERGE REPORT")?;
    writeln!(output, "═══════════════════════════════════════")?;
    writeln!(output)?;

    let stats = &report.stats;
    writeln!(output, "📂 INPUT FILES")?;
    writeln!(output, "─────────────────────────────────────")?;
    for file in &report.files {
        match file {
            LoadOutcome::Loaded { path, records } => {
                writeln!(output, "  ✅ {path}: {records} record(s)")?;
            }
            LoadOutcome::Failed { path, error } => {
                writeln!(output, "  ⚠️  {path}: {error}")?;
            }
        }
    }
    writeln!(output, "Files loaded:       {:>8}", stats.files_loaded)?;
    writeln!(output, "Files failed:       {:>8}", stats.files_failed)?;
    writeln!(output)?;

    writeln!(output, "🔍 DEDUPLICATION")?;
    writeln!(output, "─────────────────────────────────────")?;
    writeln!(output, "Records read:       {:>8}", stats.total_records)?;
    writeln!(output, "Empty key skipped:  {:>8}", stats.skipped_empty_key)?;
    writeln!(output, "Duplicates dropped: {:>8}", stats.duplicates)?;
    writeln!(output, "Unique records:     {:>8}", stats.unique_records)?;
    if stats.total_records > 0 {
        let kept = stats.unique_records as f64 / stats.total_records as f64 * 100.0;
        writeln!(output, "Kept:               {:>8.1}%", kept)?;
    }
    writeln!(output)?;

    let settings = &report.settings;
    writeln!(output, "⚙️  SETTINGS")?;
    writeln!(output, "─────────────────────────────────────")?;
    match &settings.source {
        InputSource::Files(files) => writeln!(output, "Input files:        {}", files.len())?,
        InputSource::Directory(dir) => writeln!(output, "Input directory:    {dir}")?,
    }
    writeln!(output, "Key field:          {}", settings.key_field)?;
    writeln!(
        output,
        "Case-insensitive:   {}",
        if settings.case_insensitive { "Yes" } else { "No" }
    )?;
    writeln!(
        output,
        "Output:             {} ({})",
        settings.output,
        ByteSize::b(report.output_bytes)
    )?;
    writeln!(
        output,
        "Duration:           {:.2}s",
        report.duration.as_secs_f64()
    )?;

    Ok(output)
}
