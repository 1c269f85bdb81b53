//! Raw-mode terminal setup and teardown.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{error, instrument};

/// Switches to raw mode and the alternate screen.
///
/// If the screen switch fails, raw mode is turned off again before the
/// error is returned.
#[instrument(skip_all)]
pub fn enter_tui(out: &mut impl Write) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(err) = execute!(out, EnterAlternateScreen) {
        let _ = restore_terminal(out);
        return Err(err);
    }
    Ok(())
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted; the first failure is returned.
#[instrument(skip_all)]
pub fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Combines the game loop result with the teardown result.
///
/// A loop error wins over a teardown error, which is only logged.
pub fn session_result(run: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    match (run, restored) {
        (Err(err), Err(restore_err)) => {
            error!(error = %restore_err, "Terminal restore failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => Ok(restored?),
    }
}
