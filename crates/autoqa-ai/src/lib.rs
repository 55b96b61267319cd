//! autoqa-ai — the AI audit/summary collaborator.
//!
//! Two providers sit behind the [`TicketAuditor`] trait: a Gemini HTTP client
//! and a canned simulation used when no API key is configured. Both degrade
//! instead of failing — a summary that cannot be generated comes back as an
//! apologetic string, a failed audit comes back zeroed — so callers never
//! handle provider errors.

pub mod client;
pub mod simulated;

use async_trait::async_trait;
use autoqa_core::config::AiConfig;
use autoqa_core::{AuditResult, Ticket};

pub use client::GeminiAuditor;
pub use simulated::SimulatedAuditor;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The AI collaborator seam: an executive summary over a batch and a quality
/// audit of one ticket.
#[async_trait]
pub trait TicketAuditor: Send + Sync {
    /// A short executive summary over (a bounded prefix of) the batch.
    async fn executive_summary(&self, tickets: &[Ticket]) -> String;

    /// A per-ticket quality audit.
    async fn audit(&self, ticket: &Ticket) -> AuditResult;

    /// Human-readable provider label for status lines.
    fn label(&self) -> &'static str;
}

/// Pick a provider: Gemini when `GEMINI_API_KEY` is set and non-empty,
/// otherwise the simulation.
pub fn provider(config: &AiConfig) -> Box<dyn TicketAuditor> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.is_empty() => {
            tracing::debug!(model = %config.model, "using Gemini provider");
            Box::new(GeminiAuditor::new(key, config))
        }
        _ => {
            tracing::debug!("no API key found, AI output will be simulated");
            Box::new(SimulatedAuditor)
        }
    }
}
