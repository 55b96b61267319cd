//! HTTP adapter — fetch a ticket batch from a JSON REST endpoint.
//!
//! One GET, no retry, no timeout beyond the client defaults. A response that
//! is not a JSON array of objects rejects the whole batch.

use autoqa_core::RawRecord;
use serde_json::Value;

use crate::{records_from_value, IngestError};

/// Fetch records from `url`. The response body must be a JSON array;
/// non-object elements are dropped.
pub async fn fetch(url: &str) -> Result<Vec<RawRecord>, IngestError> {
    tracing::debug!(%url, "fetching ticket batch");
    let response = reqwest::get(url).await?;
    let value: Value = response.json().await?;
    records_from_value(value)
}
