//! Static record corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON object literals in a
//! particular shape family. Parse them with [`corpus_records`].

use autoqa_core::RawRecord;

/// Records that already use the canonical field spellings and enum labels —
/// everything should exit the normalizer's exact-match stage untouched.
pub const CORPUS_CANONICAL: &[&str] = &[
    r#"{"TicketID":"TICK-2001","Customer":"Ada Lovelace","Category":"Billing","Status":"Resolved","Sentiment":"Neutral","Timestamp":"2024-01-15T10:00:00Z","Transcript":[{"role":"Customer","text":"Duplicate charge on invoice 88."},{"role":"Agent","text":"Refund issued."}]}"#,
    r#"{"TicketID":"TICK-2002","Customer":"Grace Hopper","Category":"Technical","Status":"Escalated","Sentiment":"Negative","Timestamp":"2024-01-15T10:05:00Z","Transcript":[{"role":"Customer","text":"Export crashes on large files."},{"role":"Agent","text":"Escalating to engineering."}]}"#,
    r#"{"TicketID":"TICK-2003","Customer":"Mary Jackson","Category":"Shipping","Status":"Pending","Sentiment":"Positive","Timestamp":"2024-01-15T10:10:00Z","Transcript":[{"role":"Customer","text":"Where is order 5544?"}]}"#,
];

/// Records using aliased key spellings (Department, Priority, Body, ...) —
/// candidate-key resolution has to find every field.
pub const CORPUS_ALIASED: &[&str] = &[
    r#"{"id":"c-1","Name":"Bo","Department":"billing dept","Priority":"low","Body":"I want a refund.","Date":"2024-02-01"}"#,
    r#"{"ID":"c-2","Customer Name":"Ira","Topic":"shipping delay","State":"closed","Message":"Package is late.","Date":"2024-02-02"}"#,
    r#"{"Ticket ID":"c-3","customer":"Ana","department":"tech","priority":"critical","Description":"Blue screen on boot.","Date":"2024-02-03"}"#,
];

/// Free-text and wrong-type values that must ride the heuristic and fallback
/// paths without ever producing an illegal enum member.
pub const CORPUS_MESSY: &[&str] = &[
    r#"{"Category":"URGENT tech problem!!","Status":"was closed after escalation","Sentiment":"mostly negative","Transcript":"[not json","Timestamp":"whenever"}"#,
    r#"{"Category":42,"Status":true,"Sentiment":["pos","neg"],"Message":311,"Timestamp":"2024-03-01"}"#,
    r#"{"Category":"","category":"returns desk","Status":null,"status":"DONE","Transcript":"","transcript":"plain words","Timestamp":"2024-03-02"}"#,
    r#"{"Timestamp":"2024-03-03"}"#,
];

/// Parse a corpus into owned records. Panics on malformed fixtures — these
/// are compile-time constants, not user input.
pub fn corpus_records(corpus: &[&str]) -> Vec<RawRecord> {
    corpus
        .iter()
        .map(|line| {
            serde_json::from_str::<RawRecord>(line)
                .unwrap_or_else(|e| panic!("corpus fixture must parse: {e}: {line}"))
        })
        .collect()
}

/// Generate `n` synthetic records for throughput-ish batch tests.
pub fn corpus_high_volume(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            let status = match i % 10 {
                0 => "escalated",
                1 | 2 => "open",
                _ => "resolved",
            };
            let line = format!(
                r#"{{"TicketID":"bulk-{i}","Category":"cat-{}","Status":"{status}","Body":"bulk ticket {i}","Timestamp":"2024-01-15T10:00:00Z"}}"#,
                i % 3,
            );
            serde_json::from_str(&line).expect("synthetic record must parse")
        })
        .collect()
}
