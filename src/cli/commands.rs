//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shard partition simulator CLI
#[derive(Parser, Debug)]
#[command(name = "shard-sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one partition simulation
    Run {
        /// Request file (YAML); flags below override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of IDs to generate (1-1000)
        #[arg(long)]
        count: Option<u32>,

        /// Lower bound for generated IDs (inclusive)
        #[arg(long)]
        min_id: Option<i64>,

        /// Upper bound for generated IDs (inclusive)
        #[arg(long)]
        max_id: Option<i64>,

        /// Comma-separated IDs; disables automatic generation
        #[arg(short, long)]
        manual: Option<String>,

        /// Write the result CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Validate a request file
    Validate {
        /// Request file (YAML)
        config: PathBuf,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (counts, lists, chart, table)
    Pretty,
    /// JSON report
    Json,
}
