//! Terminal state management and cleanup.
//!
//! [`enter`] switches the terminal into the interactive state (raw mode,
//! alternate screen, hidden cursor, no line wrapping, optional mouse
//! capture). The returned [`TerminalGuard`] restores it on drop, including
//! when the session ends with an error or a panic.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io;

/// Restores the terminal when dropped.
///
/// Must live for the duration of the interactive session.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

/// Prepares the terminal for the interactive list.
///
/// # Errors
///
/// Returns an error if the terminal does not support raw mode or the setup
/// sequences cannot be written. Any state already changed is restored.
pub fn enter(mouse: bool) -> io::Result<TerminalGuard> {
    enable_raw_mode()?;
    let guard = TerminalGuard { mouse };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide, DisableLineWrap)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    tracing::debug!(mouse, "terminal entered");
    Ok(guard)
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: there is nothing left to report them to.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, EnableLineWrap, Show, LeaveAlternateScreen);
        tracing::debug!("terminal restored");
    }
}
