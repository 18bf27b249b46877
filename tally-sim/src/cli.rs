use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Replays scripted trades, bookings and grades against in-memory ledgers")]
pub struct Cli {
    /// Path to the simulation config (JSON)
    #[arg(short = 'c', long, default_value = "tally.json", global = true)]
    pub config: PathBuf,

    /// Tracing filter, e.g. "info,tally_ledger=debug". Falls back to RUST_LOG.
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write the default config, overwriting only with --force
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Load the config and replay it (default)
    Run,
}
