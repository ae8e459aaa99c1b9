//! Tests for the run summary of a real merge

use std::fs;

use anyhow::Result;
use camino::Utf8PathBuf;
use tempfile::tempdir;

use csvmerge::{run_merge, Config, InputSource, LoadOutcome, MergeReport, ProgressTracker, ReportFormat};

#[test]
fn test_report_from_merge() -> Result<()> {
    let temp_dir = tempdir()?;
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf())?;
    let good = root.join("good.csv");
    let bad = root.join("bad.csv");
    fs::write(&good, "Email,Name\na@x.com,A\nA@X.com,dup\n,blank\n")?;
    fs::write(&bad, b"Email\n\xc3\x28\n")?;

    let config = Config::new(InputSource::Files(vec![good.clone(), bad.clone()]), root.join("out.csv"))
        .with_case_insensitive(true);
    let outcome = run_merge(&config, &ProgressTracker::hidden())?;
    let report = MergeReport::new(&config, outcome);

    assert_eq!(report.stats.files_resolved, 2);
    assert_eq!(report.stats.total_records, 3);
    assert_eq!(report.stats.unique_records, 1);
    assert_eq!(report.stats.duplicates, 1);
    assert_eq!(report.stats.skipped_empty_key, 1);
    assert_eq!(report.output_bytes, "Email,Name\na@x.com,A\n".len() as u64);
    assert_eq!(
        report.files[0],
        LoadOutcome::Loaded {
            path: good,
            records: 3
        }
    );

    let failed: Vec<_> = report.failed_files().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].path(), &bad);

    let text = report.render(ReportFormat::Text)?;
    assert!(text.contains("bad.csv"));
    assert!(text.contains("Duplicates dropped:        1"));

    let json: serde_json::Value = serde_json::from_str(&report.render(ReportFormat::Json)?)?;
    assert_eq!(json["stats"]["files_failed"], 1);
    assert_eq!(json["settings"]["case_insensitive"], true);
    Ok(())
}
