mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tracewright::config::TracewrightConfig;
use tracewright::ArtifactKind;

#[derive(Parser)]
#[command(
    name = "tracewright",
    version,
    about = "Conversation memory and traceability for systems-engineering chat agents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a fresh conversation about a topic
    New {
        /// Subject system under discussion
        topic: String,
    },
    /// Add a generated artifact from a file or stdin
    Add {
        /// Artifact kind: SR, SD, VR, or VM
        kind: ArtifactKind,
        /// File with the artifact text (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Rebuild the trace graph and print the edges
    Trace,
    /// Print the full conversation snapshot as JSON
    Export,
    /// Print the prompt-assembly context object as JSON
    Context,
    /// Show full details for one artifact
    Inspect {
        /// Artifact ID, e.g. SR-001
        id: String,
    },
    /// Show conversation statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level and snapshot path)
    let config = TracewrightConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for JSON output.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::New { topic } => cli::ingest::new(&config, &topic),
        Command::Add { kind, file } => cli::ingest::add(&config, kind, file.as_deref()),
        Command::Trace => cli::trace::trace(&config),
        Command::Export => cli::export::export(&config),
        Command::Context => cli::export::context(&config),
        Command::Inspect { id } => cli::inspect::inspect(&config, &id),
        Command::Stats => cli::stats::stats(&config),
    }
}
