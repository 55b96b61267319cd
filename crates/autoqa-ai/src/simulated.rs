//! Simulated provider — the no-API-key fallback.
//!
//! Returns fixed, clearly labeled output so the rest of the pipeline can be
//! exercised end to end without credentials.

use async_trait::async_trait;
use autoqa_core::{AuditResult, Ticket};

use crate::TicketAuditor;

/// Canned [`TicketAuditor`] used when `GEMINI_API_KEY` is absent.
pub struct SimulatedAuditor;

#[async_trait]
impl TicketAuditor for SimulatedAuditor {
    async fn executive_summary(&self, _tickets: &[Ticket]) -> String {
        "Gemini API Key not found. Please configure the environment to generate AI summaries."
            .to_string()
    }

    async fn audit(&self, _ticket: &Ticket) -> AuditResult {
        AuditResult {
            score: 85.0,
            empathy_score: 8.0,
            solution_score: 9.0,
            grammar_score: 10.0,
            coaching_tip: "Simulated AI: Great job resolving the issue quickly. Try to use the \
                           customer's name more often."
                .to_string(),
            summary: "Simulated AI: The agent was polite and efficient.".to_string(),
        }
    }

    fn label(&self) -> &'static str {
        "Demo Mode (Mock AI)"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
