//! Record Normalizer — maps one schema-less [`RawRecord`] into a canonical
//! [`Ticket`].
//!
//! Resolution happens in three layers, uniformly across field groups:
//!
//! 1. **Candidate-key lookup** — each field group has a fixed, ordered list of
//!    known key spellings; the first candidate whose value is present *and*
//!    truthy wins. A present-but-falsy value (empty string, `0`, `null`,
//!    `false`) falls through to the next candidate. This short-circuit rule is
//!    canonical behavior relied on by existing producers, not a bug to fix.
//! 2. **Exact enum match** — a string value that already spells a canonical
//!    enum member (case-sensitive) is kept unchanged.
//! 3. **Substring heuristics** — otherwise the value's string form is
//!    lower-cased and scanned against an ordered token table; first hit wins,
//!    and a miss lands on the enumeration's catch-all member.
//!
//! `normalize` never fails: every malformed or missing input degrades to a
//! documented default, so a caller always obtains one `Ticket` per record.
//! The only input outside the contract is a non-object record; ingestion
//! filters those out before this module runs.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::types::{
    ChatMessage, RawRecord, Role, Sentiment, Ticket, TicketCategory, TicketStatus,
};

// ---------------------------------------------------------------------------
// Candidate-key tables
// ---------------------------------------------------------------------------

const TRANSCRIPT_KEYS: &[&str] = &[
    "Transcript",
    "transcript",
    "Body",
    "body",
    "Message",
    "message",
    "Description",
];
const CATEGORY_KEYS: &[&str] = &["Category", "category", "Department", "department", "Topic"];
const STATUS_KEYS: &[&str] = &["Status", "status", "Priority", "priority", "State"];
const SENTIMENT_KEYS: &[&str] = &["Sentiment", "sentiment"];
const ID_KEYS: &[&str] = &["TicketID", "id", "ID", "Ticket ID"];
const CUSTOMER_KEYS: &[&str] = &["Customer", "customer", "Name", "name", "Customer Name"];
const TIMESTAMP_KEYS: &[&str] = &["Timestamp", "Date"];

/// Placeholder transcript when no transcript-like field resolves.
const MISSING_TRANSCRIPT: &str = "No transcript available.";

// ---------------------------------------------------------------------------
// Heuristic token tables
// ---------------------------------------------------------------------------
//
// Evaluated in order against the lower-cased string form of the raw value;
// the first matching substring wins. Priority order is part of the contract:
// the Resolved group precedes the Escalated group, so a value matching both
// (e.g. "closed — was highly urgent") resolves to Resolved.

/// Category substring tokens, highest priority first.
pub const CATEGORY_TOKENS: &[(&str, TicketCategory)] = &[
    ("bill", TicketCategory::Billing),
    ("tech", TicketCategory::Technical),
    ("ship", TicketCategory::Shipping),
    ("return", TicketCategory::Returns),
];

/// Status substring tokens, highest priority first.
pub const STATUS_TOKENS: &[(&str, TicketStatus)] = &[
    ("resolv", TicketStatus::Resolved),
    ("clos", TicketStatus::Resolved),
    ("done", TicketStatus::Resolved),
    ("low", TicketStatus::Resolved),
    ("escalat", TicketStatus::Escalated),
    ("urg", TicketStatus::Escalated),
    ("high", TicketStatus::Escalated),
    ("critic", TicketStatus::Escalated),
];

/// Sentiment substring tokens, highest priority first.
pub const SENTIMENT_TOKENS: &[(&str, Sentiment)] = &[
    ("pos", Sentiment::Positive),
    ("neg", Sentiment::Negative),
];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize one raw record into a canonical [`Ticket`].
///
/// Pure aside from the timestamp default, which reads the current time only
/// when no timestamp-like field exists. Never panics on any object input.
pub fn normalize(raw: &RawRecord, index: usize) -> Ticket {
    let transcript = map_transcript(resolve(raw, TRANSCRIPT_KEYS));

    let category = coerce(
        resolve(raw, CATEGORY_KEYS),
        "Other",
        TicketCategory::from_canonical,
        CATEGORY_TOKENS,
        TicketCategory::Other,
    );
    let status = coerce(
        resolve(raw, STATUS_KEYS),
        "Pending",
        TicketStatus::from_canonical,
        STATUS_TOKENS,
        TicketStatus::Pending,
    );
    let sentiment = coerce(
        resolve(raw, SENTIMENT_KEYS),
        "Neutral",
        Sentiment::from_canonical,
        SENTIMENT_TOKENS,
        Sentiment::Neutral,
    );

    let id = resolve(raw, ID_KEYS)
        .map(string_form)
        .unwrap_or_else(|| format!("TICK-{}", 1000 + index));
    let customer_name = resolve(raw, CUSTOMER_KEYS)
        .map(string_form)
        .unwrap_or_else(|| "Unknown".to_string());
    let timestamp = resolve(raw, TIMESTAMP_KEYS)
        .map(string_form)
        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    Ticket {
        id,
        customer_name,
        category,
        status,
        sentiment,
        transcript,
        timestamp,
        original: raw.clone(),
    }
}

/// Normalize an ordered batch. Each record is independent; output preserves
/// input order.
pub fn normalize_batch(records: &[RawRecord]) -> Vec<Ticket> {
    let tickets: Vec<Ticket> = records
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect();
    tracing::debug!(count = tickets.len(), "normalized batch");
    tickets
}

// ---------------------------------------------------------------------------
// Candidate-key resolution
// ---------------------------------------------------------------------------

/// First candidate key whose value is present and truthy, in table order.
fn resolve<'a>(raw: &'a RawRecord, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| is_truthy(value))
}

/// Truthiness matching the source semantics: `null`, `false`, `0`, and the
/// empty string are falsy; arrays and objects are truthy even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose string form of an arbitrary value, as upstream producers render it:
/// arrays join their elements with `,`, objects render as `[object Object]`.
fn string_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(string_form)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Enum coercion
// ---------------------------------------------------------------------------

/// Two-stage enum coercion shared by all three enumerated fields.
///
/// Stage 1 keeps a string value already spelling a canonical member
/// (case-sensitive; `"billing"` fails stage 1 and goes through the
/// heuristics — same result, different path, and the distinction matters for
/// producers that mix case-correct labels with free text). Stage 2 scans the
/// token table against the lower-cased string form; a miss lands on
/// `catch_all`. An unresolved field group coerces its `default` label, which
/// is itself a canonical spelling and therefore exits at stage 1.
fn coerce<E: Copy>(
    value: Option<&Value>,
    default: &str,
    from_canonical: fn(&str) -> Option<E>,
    tokens: &[(&str, E)],
    catch_all: E,
) -> E {
    let fallback = Value::String(default.to_string());
    let value = value.unwrap_or(&fallback);

    if let Value::String(s) = value {
        if let Some(exact) = from_canonical(s) {
            return exact;
        }
    }

    let lowered = string_form(value).to_lowercase();
    tokens
        .iter()
        .find(|(token, _)| lowered.contains(token))
        .map(|(_, member)| *member)
        .unwrap_or(catch_all)
}

// ---------------------------------------------------------------------------
// Transcript parsing
// ---------------------------------------------------------------------------

/// Map the resolved transcript value into a non-empty message sequence.
///
/// A textual value whose first non-space character is `[` or `{` gets a
/// speculative structured decode; any decode failure (or a wrong-shape
/// result) downgrades to a single synthetic Customer message wrapping the
/// original string. A value that is already a sequence converts element by
/// element without rejection. Everything else wraps its string form.
fn map_transcript(value: Option<&Value>) -> Vec<ChatMessage> {
    let value = match value {
        Some(v) => v,
        None => return vec![ChatMessage::customer(MISSING_TRANSCRIPT)],
    };

    let messages = match value {
        Value::String(s) => {
            let trimmed = s.trim_start();
            if trimmed.starts_with('[') || trimmed.starts_with('{') {
                match serde_json::from_str::<Vec<ChatMessage>>(s) {
                    Ok(parsed) => parsed,
                    Err(_) => return vec![ChatMessage::customer(s.as_str())],
                }
            } else {
                return vec![ChatMessage::customer(s.as_str())];
            }
        }
        Value::Array(items) => items.iter().map(message_from_value).collect(),
        other => return vec![ChatMessage::customer(string_form(other))],
    };

    if messages.is_empty() {
        // Decoded-but-empty sequences would break the non-empty invariant
        // every consumer leans on; wrap the string form instead.
        vec![ChatMessage::customer(string_form(value))]
    } else {
        messages
    }
}

/// Best-effort conversion of one transcript array element. Unknown roles
/// default to Customer; non-object elements become their string form.
fn message_from_value(value: &Value) -> ChatMessage {
    match value {
        Value::Object(obj) => {
            let role = match obj.get("role").and_then(Value::as_str) {
                Some("Agent") => Role::Agent,
                _ => Role::Customer,
            };
            let text = obj.get("text").map(string_form).unwrap_or_default();
            ChatMessage { role, text }
        }
        other => ChatMessage::customer(string_form(other)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("test record must be an object, got {other}"),
        }
    }

    #[test]
    fn empty_record_synthesizes_identity() {
        let ticket = normalize(&record(json!({})), 7);
        assert_eq!(ticket.id, "TICK-1007");
        assert_eq!(ticket.customer_name, "Unknown");
        assert_eq!(ticket.category, TicketCategory::Other);
        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.sentiment, Sentiment::Neutral);
        assert_eq!(
            ticket.transcript,
            vec![ChatMessage::customer(MISSING_TRANSCRIPT)]
        );
    }

    #[test]
    fn canonical_spelling_exits_at_stage_one() {
        let ticket = normalize(&record(json!({"Category": "Billing"})), 0);
        assert_eq!(ticket.category, TicketCategory::Billing);
    }

    #[test]
    fn free_text_category_resolves_via_substring() {
        let ticket = normalize(&record(json!({"Category": "billing issue"})), 0);
        assert_eq!(ticket.category, TicketCategory::Billing);
    }

    #[test]
    fn category_token_priority_order() {
        // "bill" outranks "tech" when both appear.
        let ticket = normalize(&record(json!({"Category": "tech billing"})), 0);
        assert_eq!(ticket.category, TicketCategory::Billing);
    }

    #[test]
    fn status_priority_value_maps_to_escalated() {
        let ticket = normalize(
            &record(json!({"Status": "High priority - needs escalation"})),
            0,
        );
        assert_eq!(ticket.status, TicketStatus::Escalated);
    }

    #[test]
    fn resolved_group_outranks_escalated_group() {
        // "clos" (Resolved group) and "urg" (Escalated group) both match;
        // the Resolved group is checked first.
        let ticket = normalize(&record(json!({"Status": "closed, was urgent"})), 0);
        assert_eq!(ticket.status, TicketStatus::Resolved);
    }

    #[test]
    fn unknown_status_defaults_to_pending() {
        let ticket = normalize(&record(json!({"Status": "in limbo"})), 0);
        assert_eq!(ticket.status, TicketStatus::Pending);
    }

    #[test]
    fn sentiment_substring_and_default() {
        assert_eq!(
            normalize(&record(json!({"Sentiment": "very positive!"})), 0).sentiment,
            Sentiment::Positive
        );
        assert_eq!(
            normalize(&record(json!({"sentiment": "NEGATIVE"})), 0).sentiment,
            Sentiment::Negative
        );
        assert_eq!(
            normalize(&record(json!({"Sentiment": "meh"})), 0).sentiment,
            Sentiment::Neutral
        );
    }

    #[test]
    fn falsy_candidate_falls_through_to_next_spelling() {
        let ticket = normalize(
            &record(json!({"Category": "", "category": "tech support"})),
            0,
        );
        assert_eq!(ticket.category, TicketCategory::Technical);

        let ticket = normalize(&record(json!({"Status": 0, "Priority": "urgent"})), 0);
        assert_eq!(ticket.status, TicketStatus::Escalated);

        let ticket = normalize(
            &record(json!({"TicketID": null, "id": "CASE-9"})),
            0,
        );
        assert_eq!(ticket.id, "CASE-9");
    }

    #[test]
    fn all_candidates_falsy_uses_the_default() {
        let ticket = normalize(&record(json!({"Category": "", "category": null})), 0);
        assert_eq!(ticket.category, TicketCategory::Other);
    }

    #[test]
    fn numeric_id_is_stringified() {
        let ticket = normalize(&record(json!({"id": 4412})), 0);
        assert_eq!(ticket.id, "4412");
    }

    #[test]
    fn aliased_customer_keys_resolve_in_order() {
        let ticket = normalize(&record(json!({"Customer Name": "Dana"})), 0);
        assert_eq!(ticket.customer_name, "Dana");

        // "Customer" outranks "Customer Name".
        let ticket = normalize(
            &record(json!({"Customer": "Ada", "Customer Name": "Dana"})),
            0,
        );
        assert_eq!(ticket.customer_name, "Ada");
    }

    #[test]
    fn structured_transcript_string_is_decoded() {
        let ticket = normalize(
            &record(json!({"Transcript": "[{\"role\":\"Customer\",\"text\":\"hi\"}]"})),
            0,
        );
        assert_eq!(ticket.transcript, vec![ChatMessage::customer("hi")]);
    }

    #[test]
    fn invalid_transcript_json_wraps_the_raw_string() {
        let ticket = normalize(&record(json!({"Transcript": "[invalid json"})), 0);
        assert_eq!(
            ticket.transcript,
            vec![ChatMessage::customer("[invalid json")]
        );
    }

    #[test]
    fn plain_text_transcript_wraps_as_customer_message() {
        let ticket = normalize(&record(json!({"Body": "My order never arrived."})), 0);
        assert_eq!(
            ticket.transcript,
            vec![ChatMessage::customer("My order never arrived.")]
        );
    }

    #[test]
    fn array_transcript_converts_elements_without_rejection() {
        let ticket = normalize(
            &record(json!({"Transcript": [
                {"role": "Customer", "text": "hello"},
                {"role": "Agent", "text": "hi there"},
                {"role": "Supervisor", "text": "listening in"},
                "bare string"
            ]})),
            0,
        );
        assert_eq!(ticket.transcript.len(), 4);
        assert_eq!(ticket.transcript[1], ChatMessage::agent("hi there"));
        // Unknown role defaults to Customer.
        assert_eq!(ticket.transcript[2].role, Role::Customer);
        assert_eq!(ticket.transcript[3], ChatMessage::customer("bare string"));
    }

    #[test]
    fn empty_array_transcript_still_yields_one_message() {
        let ticket = normalize(&record(json!({"Transcript": []})), 0);
        assert_eq!(ticket.transcript.len(), 1);
    }

    #[test]
    fn numeric_transcript_wraps_its_string_form() {
        let ticket = normalize(&record(json!({"Message": 311})), 0);
        assert_eq!(ticket.transcript, vec![ChatMessage::customer("311")]);
    }

    #[test]
    fn object_shaped_transcript_string_downgrades_to_text() {
        // Decodes as JSON but is not a sequence — wrong shape, wrapped whole.
        let raw = "{\"role\":\"Agent\",\"text\":\"hi\"}";
        let ticket = normalize(&record(json!({"Transcript": raw})), 0);
        assert_eq!(ticket.transcript, vec![ChatMessage::customer(raw)]);
    }

    #[test]
    fn timestamp_field_passes_through_unvalidated() {
        let ticket = normalize(
            &record(json!({"Timestamp": "2023-10-25T09:30:00Z"})),
            0,
        );
        assert_eq!(ticket.timestamp, "2023-10-25T09:30:00Z");

        let ticket = normalize(&record(json!({"Date": "yesterday-ish"})), 0);
        assert_eq!(ticket.timestamp, "yesterday-ish");
    }

    #[test]
    fn original_record_is_retained_verbatim() {
        let raw = record(json!({
            "TicketID": "T-1",
            "Category": "billing",
            "Extra": {"nested": [1, 2, 3]}
        }));
        let ticket = normalize(&raw, 0);
        assert_eq!(ticket.original, raw);
    }

    #[test]
    fn normalization_is_idempotent_with_explicit_timestamp() {
        let raw = record(json!({
            "TicketID": "T-2",
            "Status": "urgent",
            "Timestamp": "2024-01-01T00:00:00Z",
            "Transcript": "help"
        }));
        assert_eq!(normalize(&raw, 3), normalize(&raw, 3));
    }

    #[test]
    fn batch_preserves_input_order() {
        let records: Vec<RawRecord> = (0..4)
            .map(|i| record(json!({"TicketID": format!("T-{i}")})))
            .collect();
        let tickets = normalize_batch(&records);
        let ids: Vec<_> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T-0", "T-1", "T-2", "T-3"]);
    }

    #[test]
    fn string_form_handles_every_value_shape() {
        assert_eq!(string_form(&json!("x")), "x");
        assert_eq!(string_form(&json!(true)), "true");
        assert_eq!(string_form(&json!(null)), "null");
        assert_eq!(string_form(&json!([1, "a", [2, 3]])), "1,a,2,3");
        assert_eq!(string_form(&json!({"k": 1})), "[object Object]");
    }

    #[test]
    fn token_tables_keep_resolved_before_escalated() {
        let first_escalated = STATUS_TOKENS
            .iter()
            .position(|(_, s)| *s == TicketStatus::Escalated)
            .unwrap();
        assert!(STATUS_TOKENS[..first_escalated]
            .iter()
            .all(|(_, s)| *s == TicketStatus::Resolved));
    }
}
