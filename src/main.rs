mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use autoqa_core::config::Config;
use autoqa_core::export::{self, ExportFormat};
use autoqa_core::{normalize_batch, BatchStats, RawRecord, Ticket};

#[derive(Parser)]
#[command(name = "autoqa", about = "AutoQA — support ticket analytics and AI quality audits")]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a ticket file (JSON, CSV, or spreadsheet).
    Analyze {
        /// Path to the ticket file.
        file: PathBuf,
        #[command(flatten)]
        opts: AnalyzeOpts,
    },
    /// Fetch and analyze tickets from a JSON endpoint.
    Fetch {
        /// Endpoint URL returning a JSON array of tickets.
        url: String,
        #[command(flatten)]
        opts: AnalyzeOpts,
    },
    /// Analyze the embedded demo batch.
    Demo {
        #[command(flatten)]
        opts: AnalyzeOpts,
    },
}

#[derive(Args)]
struct AnalyzeOpts {
    /// Audit one ticket by id after the batch report.
    #[arg(long, value_name = "TICKET_ID")]
    audit: Option<String>,

    /// Write the source records (pass-through) to this path.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Export one record per line instead of a JSON array.
    #[arg(long, requires = "export")]
    jsonl: bool,

    /// Skip the AI executive summary.
    #[arg(long)]
    no_summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::defaults()
    });

    let (records, opts) = match cli.command {
        Command::Analyze { file, opts } => (autoqa_ingest::load_path(&file)?, opts),
        Command::Fetch { url, opts } => (autoqa_ingest::http::fetch(&url).await?, opts),
        Command::Demo { opts } => (autoqa_ingest::demo::records(), opts),
    };

    run_pipeline(records, opts, &config).await
}

async fn run_pipeline(
    records: Vec<RawRecord>,
    opts: AnalyzeOpts,
    config: &Config,
) -> anyhow::Result<()> {
    if records.is_empty() {
        anyhow::bail!("no valid records found");
    }

    let tickets = normalize_batch(&records);
    let stats = BatchStats::compute(&tickets);

    println!("{}", report::render_stats(&stats));
    println!(
        "{}",
        report::render_table(&tickets, config.report.truncate_cell_chars)
    );

    let auditor = autoqa_ai::provider(&config.ai);
    tracing::info!(provider = auditor.label(), "AI provider selected");

    if !opts.no_summary {
        let summary = auditor.executive_summary(&tickets).await;
        println!("Executive summary\n  {summary}\n");
    }

    if let Some(id) = &opts.audit {
        let ticket = find_ticket(&tickets, id)?;
        let audit = auditor.audit(ticket).await;
        println!("{}", report::render_audit(ticket, &audit));
    }

    if let Some(path) = &opts.export {
        let format = if opts.jsonl {
            ExportFormat::JsonLines
        } else {
            ExportFormat::Json
        };
        export::write_to_path(&tickets, format, path)?;
        println!("Exported {} source records to {}", tickets.len(), path.display());
    }

    Ok(())
}

fn find_ticket<'a>(tickets: &'a [Ticket], id: &str) -> anyhow::Result<&'a Ticket> {
    tickets
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| anyhow::anyhow!("no ticket with id {id:?} in this batch"))
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}
