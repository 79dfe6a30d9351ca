use std::io::{self, Stdout, Write, stdout};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to the alternate screen with raw mode and mouse capture.
///
/// A failure halfway through undoes whatever was already switched on, and a
/// panic hook puts the terminal back before the panic message is printed.
pub fn init() -> Result<Tui> {
    install_panic_hook();
    match enter() {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            if let Err(restore_err) = restore() {
                warn!("terminal restore after failed init also failed: {restore_err:#}");
            }
            Err(err)
        }
    }
}

fn enter() -> Result<Tui> {
    stdout()
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    stdout()
        .execute(EnableMouseCapture)
        .context("failed to enable mouse capture")?;
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("failed to create terminal")?;
    terminal.hide_cursor().context("failed to hide cursor")?;
    Ok(terminal)
}

/// Leaves the alternate screen and raw mode. Every step runs even when an
/// earlier one fails; the first error is reported.
pub fn restore() -> Result<()> {
    let screen = reset_screen(&mut stdout());
    let raw = disable_raw_mode();
    screen.context("failed to leave alternate screen")?;
    raw.context("failed to disable raw mode")?;
    Ok(())
}

fn reset_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let leave = out.execute(LeaveAlternateScreen).map(|_| ());
    let mouse = out.execute(DisableMouseCapture).map(|_| ());
    leave.and(mouse)
}

fn install_panic_hook() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            error!("panic: {info}");
            previous(info);
        }));
    });
}
