//! Spreadsheet adapter — xlsx/xls/xlsm/ods via calamine.
//!
//! Mirrors the sheet-to-records behavior of the original upload path: only
//! the first sheet is read, its first row names the record keys, empty cells
//! are omitted from the record, and numeric/boolean cells keep their type.

use std::path::Path;

use autoqa_core::RawRecord;
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;

use crate::IngestError;

/// Load records from the first sheet of a spreadsheet file.
pub fn load(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::Spreadsheet("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_label).collect(),
        None => return Ok(Vec::new()),
    };

    Ok(rows.filter_map(|row| row_to_record(&headers, row)).collect())
}

/// Convert one data row into a record; `None` for fully empty rows.
fn row_to_record(headers: &[String], row: &[Data]) -> Option<RawRecord> {
    let mut record = RawRecord::new();
    for (header, cell) in headers.iter().zip(row.iter()) {
        if header.is_empty() {
            continue;
        }
        if let Some(value) = cell_to_value(cell) {
            record.insert(header.clone(), value);
        }
    }
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// JSON value for one cell; `None` for empty or error cells.
fn cell_to_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(n) => Some(Value::from(*n)),
        Data::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => Some(Value::String(dt.to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
