//! Test builders — ergonomic constructors for raw records and ticket batches.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use autoqa_core::{normalize, normalize_batch, RawRecord, Ticket};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let raw = RawRecordBuilder::new()
///     .field("TicketID", "T-99")
///     .field("Category", "billing dispute")
///     .field("Priority", "high")
///     .build();
/// ```
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        let mut record = RawRecord::new();
        // Pinned so the timestamp-default path never fires in tests.
        record.insert(
            "Timestamp".to_string(),
            Value::String("2024-01-15T10:00:00Z".to_string()),
        );
        Self { record }
    }

    /// A builder with no pinned timestamp, for exercising the default path.
    pub fn bare() -> Self {
        Self {
            record: RawRecord::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }

    /// Build and normalize in one step, as batch element `index`.
    pub fn normalize(self, index: usize) -> Ticket {
        normalize(&self.record, index)
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Parse a JSON object literal into a [`RawRecord`]. Panics on non-objects.
pub fn record_from_json(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture record must be a JSON object, got: {other}"),
    }
}

/// Build a normalized ticket from a JSON object literal.
pub fn ticket_from_json(value: Value) -> Ticket {
    normalize(&record_from_json(value), 0)
}

/// Build a batch of `n` records cycling through category, status, and
/// sentiment values so every enum member shows up in larger corpora.
pub fn build_batch(n: usize) -> Vec<Ticket> {
    const CATEGORIES: &[&str] = &["Billing", "Technical", "Shipping", "Returns", "Other"];
    const STATUSES: &[&str] = &["Resolved", "Escalated", "Pending"];
    const SENTIMENTS: &[&str] = &["Positive", "Neutral", "Negative"];

    let records: Vec<RawRecord> = (0..n)
        .map(|i| {
            RawRecordBuilder::new()
                .field("TicketID", format!("T-{i}"))
                .field("Customer", format!("customer-{}", i % 7))
                .field("Category", CATEGORIES[i % CATEGORIES.len()])
                .field("Status", STATUSES[i % STATUSES.len()])
                .field("Sentiment", SENTIMENTS[i % SENTIMENTS.len()])
                .field("Body", format!("ticket body {i}"))
                .build()
        })
        .collect();
    normalize_batch(&records)
}
