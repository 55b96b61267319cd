//! autoqa-core — canonical ticket model and batch analytics.
//!
//! This crate holds the heart of autoqa: the record normalizer that turns
//! schema-less source records into canonical tickets, plus the batch
//! statistics and pass-through export built on top of it.
//!
//! # Architecture
//!
//! ```text
//! Ingest ──► Normalizer ──► Stats ──► Report / AI audit
//!               │
//!               └──► Export (source records, pass-through)
//! ```
//!
//! Ingestion adapters live in `autoqa-ingest`; the AI collaborator lives in
//! `autoqa-ai`. Everything here is synchronous and infallible by contract —
//! a well-formed record in, a canonical ticket out, no exceptions.

pub mod config;
pub mod export;
pub mod normalizer;
pub mod stats;
pub mod types;

pub use normalizer::{normalize, normalize_batch};
pub use stats::BatchStats;
pub use types::{
    AuditResult, ChatMessage, RawRecord, Role, Sentiment, Ticket, TicketCategory, TicketStatus,
};
