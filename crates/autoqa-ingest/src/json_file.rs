//! JSON file adapter — a top-level array of ticket objects.

use std::path::Path;

use autoqa_core::RawRecord;
use serde_json::Value;

use crate::{records_from_value, IngestError};

/// Load records from a JSON file. The document must be a top-level array;
/// non-object elements are dropped.
pub fn load(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text)?;
    records_from_value(value)
}
