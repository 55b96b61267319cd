//! Domain-specific assertion helpers for autoqa harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* normalization invariant was violated and for which
//! source record.

use autoqa_core::{RawRecord, Ticket};
use pretty_assertions::assert_eq;

/// Assert that a ticket has a specific category, by canonical label.
///
/// ```rust
/// assert_category!(ticket, "Billing");
/// ```
#[macro_export]
macro_rules! assert_category {
    ($ticket:expr, $label:expr) => {{
        let ticket: &autoqa_core::Ticket = &$ticket;
        let expected: &str = $label;
        if ticket.category.as_str() != expected {
            panic!(
                "assert_category! failed:\n  expected: {:?}\n  actual:   {:?}\n  source: {:?}",
                expected,
                ticket.category.as_str(),
                ticket.original
            );
        }
    }};
}

/// Assert that a ticket has a specific status, by canonical label.
#[macro_export]
macro_rules! assert_status {
    ($ticket:expr, $label:expr) => {{
        let ticket: &autoqa_core::Ticket = &$ticket;
        let expected: &str = $label;
        if ticket.status.as_str() != expected {
            panic!(
                "assert_status! failed:\n  expected: {:?}\n  actual:   {:?}\n  source: {:?}",
                expected,
                ticket.status.as_str(),
                ticket.original
            );
        }
    }};
}

/// Assert that a ticket has a specific sentiment, by canonical label.
#[macro_export]
macro_rules! assert_sentiment {
    ($ticket:expr, $label:expr) => {{
        let ticket: &autoqa_core::Ticket = &$ticket;
        let expected: &str = $label;
        if ticket.sentiment.as_str() != expected {
            panic!(
                "assert_sentiment! failed:\n  expected: {:?}\n  actual:   {:?}\n  source: {:?}",
                expected,
                ticket.sentiment.as_str(),
                ticket.original
            );
        }
    }};
}

/// Assert the canonical-ticket invariants that must hold for *every*
/// normalizer output, no matter how malformed the source record:
///
/// - the transcript is a non-empty sequence,
/// - the id is non-empty,
/// - the source record is retained unmodified.
pub fn assert_canonical_invariants(ticket: &Ticket, source: &RawRecord) {
    assert!(
        !ticket.transcript.is_empty(),
        "normalized ticket must have a non-empty transcript: {:?}",
        source
    );
    assert!(
        !ticket.id.is_empty(),
        "normalized ticket must have a non-empty id: {:?}",
        source
    );
    assert_eq!(
        &ticket.original, source,
        "normalization must retain the source record verbatim"
    );
}
