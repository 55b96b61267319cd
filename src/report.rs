//! Plain-text report rendering for the CLI: batch stats, the dynamic ticket
//! table, and audit results.

use autoqa_core::stats::display_columns;
use autoqa_core::{AuditResult, BatchStats, Ticket};
use serde_json::Value;

/// Render the KPI block for a batch.
pub fn render_stats(stats: &BatchStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Tickets analyzed   {}\n", stats.total));
    out.push_str(&format!("Auto-QA score      {}/100\n", stats.qa_score));
    out.push_str(&format!("Resolution rate    {}%\n", stats.resolution_rate));
    out.push_str(&format!("Negative sentiment {}%\n", stats.negative_rate));
    out.push_str(&format!("Top category       {}\n", stats.top_category));
    out.push('\n');
    out.push_str("Volume by category\n");
    for (category, count) in &stats.category_volume {
        out.push_str(&format!("  {:<10} {}\n", category.to_string(), count));
    }
    out
}

/// Render the ticket table using the dynamic source columns, truncating long
/// cells at `truncate_chars`.
pub fn render_table(tickets: &[Ticket], truncate_chars: usize) -> String {
    let columns = display_columns(tickets);
    if columns.is_empty() {
        return String::new();
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        rows.push(
            columns
                .iter()
                .map(|key| {
                    ticket
                        .original
                        .get(key)
                        .map(|v| truncate(&cell_text(v), truncate_chars))
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect(),
        );
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{h:<w$}"))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Render one audit result.
pub fn render_audit(ticket: &Ticket, audit: &AuditResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Audit for {} ({}) — overall {}/100\n",
        ticket.id, ticket.customer_name, audit.score
    ));
    out.push_str(&format!("  Empathy  {}/10\n", audit.empathy_score));
    out.push_str(&format!("  Solution {}/10\n", audit.solution_score));
    out.push_str(&format!("  Grammar  {}/10\n", audit.grammar_score));
    out.push_str(&format!("  Summary: {}\n", audit.summary));
    out.push_str(&format!("  Coaching tip: {}\n", audit.coaching_tip));
    out
}

/// Table cell text: strings render bare, nested values as compact JSON, and
/// falsy values as the `-` placeholder the table uses for absent cells.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => "-".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => "-".to_string(),
        Value::String(s) if s.is_empty() => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
