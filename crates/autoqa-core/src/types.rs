//! Core types for autoqa-core.
//!
//! This module defines the fundamental data structures shared across all
//! architectural layers: the canonical [`Ticket`], its three fixed
//! enumerations, the transcript [`ChatMessage`], and the [`AuditResult`]
//! returned by the AI collaborator.

use serde::{Deserialize, Serialize};

/// A schema-less input record, one per ingested row/object.
///
/// Shape is not controlled by this system: keys and value types are whatever
/// the upload or API response contained. Insertion order is preserved so that
/// display and export reflect the source's column order.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A canonical ticket produced by the normalizer.
///
/// Created once, synchronously, from exactly one [`RawRecord`] and its batch
/// index; immutable thereafter. `category`, `status`, and `sentiment` are
/// always legal enum members and `transcript` is never empty, no matter how
/// malformed the source record was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique within a batch; synthesized as `TICK-{1000+index}` when the
    /// source record carries no identity field.
    pub id: String,
    pub customer_name: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub sentiment: Sentiment,
    /// Ordered conversation; never empty.
    pub transcript: Vec<ChatMessage>,
    /// ISO-8601 expected, not validated. Defaults to the normalization time
    /// when the source record has no timestamp-like field.
    pub timestamp: String,
    /// The source record retained verbatim for display and export.
    #[serde(rename = "originalData")]
    pub original: RawRecord,
}

/// Ticket category, coerced from free-text source values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    Billing,
    Technical,
    Shipping,
    Returns,
    Other,
}

impl TicketCategory {
    /// All members in canonical order (the chart series order).
    pub const ALL: [TicketCategory; 5] = [
        TicketCategory::Billing,
        TicketCategory::Technical,
        TicketCategory::Shipping,
        TicketCategory::Returns,
        TicketCategory::Other,
    ];

    /// Exact-match lookup against the canonical spellings (case-sensitive).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "Billing" => Some(TicketCategory::Billing),
            "Technical" => Some(TicketCategory::Technical),
            "Shipping" => Some(TicketCategory::Shipping),
            "Returns" => Some(TicketCategory::Returns),
            "Other" => Some(TicketCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Billing => "Billing",
            TicketCategory::Technical => "Technical",
            TicketCategory::Shipping => "Shipping",
            TicketCategory::Returns => "Returns",
            TicketCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket lifecycle status, coerced from status- or priority-like values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Resolved,
    Escalated,
    Pending,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Resolved,
        TicketStatus::Escalated,
        TicketStatus::Pending,
    ];

    /// Exact-match lookup against the canonical spellings (case-sensitive).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "Resolved" => Some(TicketStatus::Resolved),
            "Escalated" => Some(TicketStatus::Escalated),
            "Pending" => Some(TicketStatus::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Escalated => "Escalated",
            TicketStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer sentiment, coerced from sentiment-like values when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
    ];

    /// Exact-match lookup against the canonical spellings (case-sensitive).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who spoke a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Agent,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => f.write_str("Customer"),
            Role::Agent => f.write_str("Agent"),
        }
    }
}

/// One message in a ticket transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn customer(text: impl Into<String>) -> Self {
        Self {
            role: Role::Customer,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            text: text.into(),
        }
    }
}

/// Per-ticket quality audit returned by the AI collaborator.
///
/// `score` is 0–100; the three sub-scores are 1–10. The wire shape is
/// camelCase to match the structured output the model is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub score: f64,
    pub empathy_score: f64,
    pub solution_score: f64,
    pub grammar_score: f64,
    pub coaching_tip: String,
    pub summary: String,
}
