//! autoqa-ingest — ticket source adapters for autoqa.
//!
//! Each adapter reduces its source — a JSON or CSV file, a spreadsheet, an
//! HTTP endpoint, or the embedded demo batch — to an ordered `Vec<RawRecord>`
//! for the normalizer. Records that are not JSON objects are filtered out
//! here, upholding the normalizer's caller contract.
//!
//! Ingestion failures are all-or-nothing: a source that cannot be reduced to
//! a record sequence yields a typed [`IngestError`] and the batch is
//! discarded. Nothing partially loads.

pub mod csv_file;
pub mod demo;
pub mod http;
pub mod json_file;
pub mod spreadsheet;

use std::path::Path;

use autoqa_core::RawRecord;
use serde_json::Value;

/// Detected source format, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
    /// xlsx, xls, xlsm, or ods — anything calamine auto-detects.
    Spreadsheet,
}

/// Errors surfaced by the ingestion layer.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level array of ticket records")]
    NotAnArray,
    #[error("unsupported file format: .{0} (use JSON, CSV, or a spreadsheet)")]
    UnsupportedFormat(String),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Detect the source format from a file extension.
pub fn detect_format(path: &Path) -> Result<SourceFormat, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "json" => Ok(SourceFormat::Json),
        "csv" => Ok(SourceFormat::Csv),
        "xlsx" | "xls" | "xlsm" | "ods" => Ok(SourceFormat::Spreadsheet),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a record batch from a file, dispatching on its extension.
pub fn load_path(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let records = match detect_format(path)? {
        SourceFormat::Json => json_file::load(path)?,
        SourceFormat::Csv => csv_file::load(path)?,
        SourceFormat::Spreadsheet => spreadsheet::load(path)?,
    };
    tracing::debug!(count = records.len(), path = %path.display(), "ingested batch");
    Ok(records)
}

/// Reduce a parsed JSON document to a record sequence: a top-level array is
/// required, and non-object elements are dropped.
pub(crate) fn records_from_value(value: Value) -> Result<Vec<RawRecord>, IngestError> {
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect()),
        _ => Err(IngestError::NotAnArray),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
