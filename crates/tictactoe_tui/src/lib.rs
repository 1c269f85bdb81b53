//! Terminal front-end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **App**: owns the [`tictactoe::GameState`], the board cursor and the
//!   transient rename editor; turns key presses into game mutations
//! - **UI**: stateless rendering of a fresh [`tictactoe::GameView`] per frame
//! - **Config**: TOML file plus command-line overrides
//! - **Terminal**: raw-mode setup and teardown around the game loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, MAX_NAME_LEN, NameEditor};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayersConfig, TuiConfig};
pub use input::{digit_square, move_cursor};
