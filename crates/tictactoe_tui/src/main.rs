//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe::GameState;
use tictactoe_tui::terminal::{enter_tui, restore_terminal, session_result};
use tictactoe_tui::{App, Cli, TuiConfig, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(
        cli.player_x,
        cli.player_o,
        cli.log_file,
    );

    init_tracing(&config)?;
    info!(log_file = %config.log_file().display(), "Starting tic-tac-toe TUI");

    let mut stdout = io::stdout();
    enter_tui(&mut stdout)?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(err.into());
        }
    };

    let app = App::new(GameState::with_players(config.registry()));
    let res = run_app(&mut terminal, app);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let restored = restore_terminal(terminal.backend_mut());
    info!("Exiting");
    session_result(res, restored)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
