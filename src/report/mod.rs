//! Run summary for a merge
//!
//! Rendered after a successful run in one of two formats:
//! - Text (human-readable console output)
//! - JSON (structured data for scripts)

use std::time::{Duration, SystemTime};

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::pipeline::MergeOutcome;
use crate::types::{InputSource, LoadOutcome, MergeStats};

pub mod formatters;

/// Complete summary of one merge run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Record and file counters
    pub stats: MergeStats,
    /// Per-file load results, in merge order
    pub files: Vec<LoadOutcome>,
    /// Settings the run used
    pub settings: MergeSettings,
    /// Size of the written output in bytes
    pub output_bytes: u64,
    /// Wall time of the run
    pub duration: Duration,
    /// Report generation timestamp
    pub generated_at: SystemTime,
}

/// Settings echoed back in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSettings {
    pub source: InputSource,
    pub output: Utf8PathBuf,
    pub key_field: String,
    pub case_insensitive: bool,
}

impl From<&Config> for MergeSettings {
    fn from(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            output: config.output.clone(),
            key_field: config.key_field.clone(),
            case_insensitive: config.case_insensitive,
        }
    }
}

impl MergeReport {
    pub fn new(config: &Config, outcome: MergeOutcome) -> Self {
        Self {
            stats: outcome.stats,
            files: outcome.files,
            settings: MergeSettings::from(config),
            output_bytes: outcome.output_bytes,
            duration: outcome.duration,
            generated_at: SystemTime::now(),
        }
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &LoadOutcome> {
        self.files.iter().filter(|f| f.is_failed())
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json_pretty(),
        }
    }

    /// Generate a text report
    pub fn to_text(&self) -> Result<String> {
        formatters::text::format_report(self)
    }

    /// Generate a JSON report with pretty printing
    pub fn to_json_pretty(&self) -> Result<String> {
        formatters::json::format_report_pretty(self)
    }
}

/// Output format of the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_files() {
        let report = test_support::sample_report();
        let failed: Vec<_> = report.failed_files().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].path().as_str(), "in/b.csv");
    }
}
