use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(
    version = "0.1.0",
    about = "IdeaPulse - local idea tracker with tags, moods and statistics"
)]
pub struct Cli {
    /// Path to the data directory
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the ideapulse application
    #[clap(subcommand)]
    pub command: Commands,
}
