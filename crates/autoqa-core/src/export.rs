//! Export — pass-through serialization of each ticket's retained source
//! record.
//!
//! Export never re-derives anything from the canonical fields: it writes the
//! `original` records exactly as ingested, so a round trip through autoqa is
//! lossless for downstream tooling.

use std::io::Write;
use std::path::Path;

use crate::types::Ticket;

/// Output shape for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One pretty-printed JSON array of source records.
    Json,
    /// One source record per line.
    JsonLines,
}

/// Errors surfaced by the export layer.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write the batch's source records to `writer`. An empty batch produces an
/// empty array (or an empty file for JSONL), not an error.
pub fn write_batch<W: Write>(
    tickets: &[Ticket],
    format: ExportFormat,
    mut writer: W,
) -> Result<(), ExportError> {
    let records: Vec<_> = tickets.iter().map(|t| &t.original).collect();
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writer.write_all(b"\n")?;
        }
        ExportFormat::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write the batch's source records to a file at `path`.
pub fn write_to_path(
    tickets: &[Ticket],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_batch(tickets, format, std::io::BufWriter::new(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
