//! Command-line interface for timeline_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeline Tic-Tac-Toe - several games side by side, with replay
#[derive(Parser, Debug)]
#[command(name = "timeline_tui")]
#[command(about = "Play tic-tac-toe games with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Number of games to open at startup (overrides config)
    #[arg(short, long)]
    pub games: Option<usize>,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run; plays in the terminal when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Print the initial view tree as JSON and exit
    DumpView {
        /// Print the JSON schema of the view tree instead
        #[arg(long)]
        schema: bool,
    },
}
