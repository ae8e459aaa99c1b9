//! JSON formatter for structured output

use anyhow::Result;

use crate::report::MergeReport;

/// Format a merge report as pretty-printed JSON
pub fn format_report_pretty(report: &MergeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::sample_report;

    #[test]
    fn test_format_json_fields() {
        let json = format_report_pretty(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stats"]["unique_records"], 3);
        assert_eq!(value["settings"]["key_field"], "Email");
        assert_eq!(value["files"][1]["status"], "failed");
        assert_eq!(value["files"][0]["records"], 5);
    }

    #[test]
    fn test_format_json_pretty() {
        let json = format_report_pretty(&sample_report()).unwrap();
        assert!(json.contains("{\n"));
        assert!(json.contains("  "));

        let _: serde_json::Value = serde_json::from_str(&json).unwrap();
    }
}
