//! CSV file adapter — header inference, every cell ingested as a string.
//!
//! The header row names the record keys. Rows shorter than the header simply
//! omit the trailing keys; rows longer than the header drop the extra cells.
//! Fully empty rows are skipped, matching how the original upload path
//! treated blank lines.

use std::path::Path;

use autoqa_core::RawRecord;
use serde_json::Value;

use crate::IngestError;

/// Load records from a CSV file.
pub fn load(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.clone(), Value::String(cell.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
