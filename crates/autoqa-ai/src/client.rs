//! Gemini HTTP client — summary and audit over the `generateContent`
//! endpoint.
//!
//! The audit call requests structured JSON output via `responseSchema`, so
//! the model's reply decodes straight into [`AuditResult`]. Failures at any
//! step (transport, non-success status, malformed payload) are logged and
//! downgraded to the same canned degradations the rest of the system expects.

use async_trait::async_trait;
use autoqa_core::config::AiConfig;
use autoqa_core::{AuditResult, Ticket};
use serde_json::{json, Value};

use crate::TicketAuditor;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Internal provider error; never escapes the trait methods.
#[derive(Debug, thiserror::Error)]
enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no text in model response")]
    EmptyResponse,
    #[error("malformed audit payload: {0}")]
    MalformedAudit(#[from] serde_json::Error),
}

/// Gemini-backed [`TicketAuditor`].
pub struct GeminiAuditor {
    http: reqwest::Client,
    api_key: String,
    model: String,
    summary_sample_size: usize,
}

impl GeminiAuditor {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            summary_sample_size: config.summary_sample_size,
        }
    }

    async fn generate(&self, body: Value) -> Result<String, ProviderError> {
        let url = format!(
            "{API_BASE}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key,
        );
        let response = self.http.post(&url).json(&body).send().await?;
        let payload: Value = response.error_for_status()?.json().await?;
        response_text(&payload).ok_or(ProviderError::EmptyResponse)
    }

    async fn try_summary(&self, tickets: &[Ticket]) -> Result<String, ProviderError> {
        let sample = &tickets[..tickets.len().min(self.summary_sample_size)];
        let body = json!({
            "contents": [{ "parts": [{ "text": summary_prompt(sample) }] }]
        });
        self.generate(body).await
    }

    async fn try_audit(&self, ticket: &Ticket) -> Result<AuditResult, ProviderError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": audit_prompt(ticket) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": audit_response_schema(),
            }
        });
        let text = self.generate(body).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl TicketAuditor for GeminiAuditor {
    async fn executive_summary(&self, tickets: &[Ticket]) -> String {
        match self.try_summary(tickets).await {
            Ok(summary) => summary,
            Err(ProviderError::EmptyResponse) => "Unable to generate summary.".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "executive summary failed");
                "Error generating executive summary. Please try again later.".to_string()
            }
        }
    }

    async fn audit(&self, ticket: &Ticket) -> AuditResult {
        match self.try_audit(ticket).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(ticket = %ticket.id, error = %e, "ticket audit failed");
                AuditResult {
                    score: 0.0,
                    empathy_score: 0.0,
                    solution_score: 0.0,
                    grammar_score: 0.0,
                    coaching_tip: "Error retrieving AI audit.".to_string(),
                    summary: "Error".to_string(),
                }
            }
        }
    }

    fn label(&self) -> &'static str {
        "Gemini"
    }
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// One snippet line per ticket: id, enums, and the opening customer line
/// truncated to 50 characters.
fn summary_prompt(tickets: &[Ticket]) -> String {
    let snippets: Vec<String> = tickets
        .iter()
        .map(|t| {
            let opening: String = t
                .transcript
                .first()
                .map(|m| m.text.chars().take(50).collect())
                .unwrap_or_default();
            format!(
                "- ID: {}, Category: {}, Status: {}, Sentiment: {}, Customer said: \"{}...\"",
                t.id, t.category, t.status, t.sentiment, opening
            )
        })
        .collect();

    format!(
        "You are a QA Executive for a support team.\n\
         Analyze the following support ticket snippets and generate a brief, \
         professional executive summary (max 3 sentences).\n\
         Highlight key trends, major pain points, and areas of success.\n\n\
         Data:\n{}",
        snippets.join("\n")
    )
}

fn audit_prompt(ticket: &Ticket) -> String {
    let transcript: Vec<String> = ticket
        .transcript
        .iter()
        .map(|m| format!("{}: {}", m.role, m.text))
        .collect();

    format!(
        "Act as a Quality Assurance Auditor. Audit the following customer \
         support transcript.\n\
         Return the result in JSON format.\n\n\
         Scoring Criteria:\n\
         - Empathy (1-10): How well did the agent understand and relate to the customer?\n\
         - Solution (1-10): Did the agent solve the problem or provide a clear next step?\n\
         - Grammar (1-10): Professionalism and correctness.\n\
         - Overall Score (0-100): Weighted average.\n\
         - Coaching Tip: A specific, constructive tip for the agent.\n\
         - Summary: One sentence summary of the interaction.\n\n\
         Transcript:\n{}",
        transcript.join("\n")
    )
}

fn audit_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER" },
            "empathyScore": { "type": "NUMBER" },
            "solutionScore": { "type": "NUMBER" },
            "grammarScore": { "type": "NUMBER" },
            "coachingTip": { "type": "STRING" },
            "summary": { "type": "STRING" },
        },
        "required": ["score", "empathyScore", "solutionScore", "grammarScore", "coachingTip", "summary"]
    })
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

/// Text of the first candidate part, if any.
fn response_text(payload: &Value) -> Option<String> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
