//! JSON report output writer.
//!
//! Writes report documents to JSON files or strings.

use crate::report::Report;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A report together with the request it answers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub version: &'static str,
    pub chain_id: u64,
    pub account: String,
    pub generated_at: DateTime<Utc>,
    pub report: &'a Report,
}

impl<'a> ReportDocument<'a> {
    pub fn new(chain_id: u64, account: &str, report: &'a Report) -> Self {
        Self {
            version: SCHEMA_VERSION,
            chain_id,
            account: account.to_lowercase(),
            generated_at: Utc::now(),
            report,
        }
    }
}

/// Write a report document to a JSON file
///
/// **Public** - main entry point for file output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    document: &ReportDocument<'_>,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a report document to a string
pub fn report_to_string(document: &ReportDocument<'_>, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };

    json.map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::assemble_report;
    use crate::subgraph::ReferralsQueryData;
    use tempfile::NamedTempFile;

    fn create_test_report() -> Report {
        assemble_report(&ReferralsQueryData::default()).unwrap()
    }

    #[test]
    fn test_write_report() {
        let report = create_test_report();
        let document = ReportDocument::new(42161, "0xABC", &report);
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&document, temp_file.path()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(temp_file.path()).unwrap()).unwrap();
        assert_eq!(written["version"], SCHEMA_VERSION);
        assert_eq!(written["chainId"], 42161);
        assert_eq!(written["account"], "0xabc");
        assert_eq!(written["report"]["cumulativeStats"]["volume"], "0");
        assert_eq!(written["report"]["referralTotalStats"]["discountUsd"], "0");
    }

    #[test]
    fn test_report_to_string_compact() {
        let report = create_test_report();
        let document = ReportDocument::new(42161, "0xabc", &report);

        let json = report_to_string(&document, false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""rebateDistributions":[]"#));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        let report = create_test_report();
        write_report(&ReportDocument::new(42161, "0xabc", &report), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
