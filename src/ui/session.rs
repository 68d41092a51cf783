//! Terminal mode guard
//!
//! [`TerminalSession`] puts the terminal into raw mode with the alternate
//! screen and mouse capture, and undoes whatever it managed to enable when
//! dropped. A panic hook does the same before the panic message prints, so
//! the message lands on a usable terminal.

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::OnceLock;

/// Owns the terminal modes for the lifetime of the UI
#[derive(Debug)]
pub struct TerminalSession {
    raw: bool,
    screen: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut session = TerminalSession {
            raw: true,
            screen: false,
        };
        // On failure `session` drops here and leaves raw mode
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        session.screen = true;
        tracing::debug!(target: "ui", "terminal session entered");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = leave_screen(&mut io::stdout(), self.screen);
        if self.raw {
            let _ = disable_raw_mode();
        }
        tracing::debug!(target: "ui", "terminal restored");
    }
}

/// Undo mouse capture and the alternate screen if `screen` was entered, and
/// always show the cursor
fn leave_screen<W: Write>(out: &mut W, screen: bool) -> io::Result<()> {
    if screen {
        execute!(out, DisableMouseCapture, LeaveAlternateScreen)?;
    }
    execute!(out, cursor::Show)?;
    out.flush()
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = leave_screen(&mut io::stdout(), true);
            let _ = disable_raw_mode();
            previous(info);
        }));
    });
}
