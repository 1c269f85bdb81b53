//! Command-line interface for the tic-tac-toe TUI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting name for player X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Starting name for player O
    #[arg(long)]
    pub player_o: Option<String>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
