//! Batch statistics — the aggregates the dashboard surfaces over one
//! normalized batch.

use crate::types::{Sentiment, Ticket, TicketCategory, TicketStatus};

/// Aggregates computed over one batch of tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    /// Percent of Resolved tickets, rounded to the nearest integer.
    pub resolution_rate: u32,
    /// Percent of Negative-sentiment tickets, rounded.
    pub negative_rate: u32,
    /// `min(100, round(80 + positive_share * 10))`; 0 for an empty batch.
    pub qa_score: u32,
    /// Most frequent category label; `"N/A"` for an empty batch. Ties break
    /// toward the category first reached in batch order.
    pub top_category: String,
    /// Per-category counts in canonical enum order (the chart series).
    pub category_volume: Vec<(TicketCategory, usize)>,
}

impl BatchStats {
    pub fn compute(tickets: &[Ticket]) -> Self {
        let total = tickets.len();
        let category_volume = TicketCategory::ALL
            .iter()
            .map(|&category| {
                let count = tickets.iter().filter(|t| t.category == category).count();
                (category, count)
            })
            .collect();

        if total == 0 {
            return Self {
                total: 0,
                resolution_rate: 0,
                negative_rate: 0,
                qa_score: 0,
                top_category: "N/A".to_string(),
                category_volume,
            };
        }

        let resolved = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Resolved)
            .count();
        let negative = tickets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Negative)
            .count();
        let positive = tickets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Positive)
            .count();

        // Count categories in first-occurrence order so that ties resolve to
        // the category reached earliest in the batch.
        let mut occurrence: Vec<(TicketCategory, usize)> = Vec::new();
        for ticket in tickets {
            match occurrence.iter_mut().find(|(c, _)| *c == ticket.category) {
                Some((_, count)) => *count += 1,
                None => occurrence.push((ticket.category, 1)),
            }
        }
        let mut top = occurrence[0];
        for &(category, count) in &occurrence[1..] {
            if count > top.1 {
                top = (category, count);
            }
        }

        let pct = |n: usize| ((n as f64 / total as f64) * 100.0).round() as u32;
        let sentiment_bonus = (positive as f64 / total as f64) * 10.0;
        let qa_score = ((80.0 + sentiment_bonus).round() as u32).min(100);

        Self {
            total,
            resolution_rate: pct(resolved),
            negative_rate: pct(negative),
            qa_score,
            top_category: top.0.to_string(),
            category_volume,
        }
    }
}

/// Column keys for the dynamic ticket table: the first ticket's source keys,
/// minus transcript-like fields that would flood the view. If the exclusion
/// removes everything, all keys come back.
pub fn display_columns(tickets: &[Ticket]) -> Vec<String> {
    let first = match tickets.first() {
        Some(t) => t,
        None => return Vec::new(),
    };
    let all: Vec<String> = first.original.keys().cloned().collect();
    let kept: Vec<String> = all
        .iter()
        .filter(|k| !matches!(k.as_str(), "Transcript" | "transcript" | "Body" | "body"))
        .cloned()
        .collect();
    if kept.is_empty() {
        all
    } else {
        kept
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
