//! "Press any key to continue" acknowledgment
//!
//! Puts the terminal in raw mode and waits for a single key press.
//! Raw mode is always restored, even when reading fails.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use is_terminal::IsTerminal;

use crate::domain::ports::Acknowledger;

pub const PAUSE_PROMPT: &str = "Press any key to continue . . .";

/// Waits for a key press on an interactive terminal; no-op otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypressAcknowledger;

impl KeypressAcknowledger {
    pub fn new() -> Self {
        Self
    }

    /// True when stdin is a terminal we can read a key from
    pub fn is_interactive() -> bool {
        io::stdin().is_terminal()
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Acknowledger for KeypressAcknowledger {
    fn wait(&self) -> io::Result<()> {
        if !Self::is_interactive() {
            return Ok(());
        }

        let mut stdout = io::stdout();
        write!(stdout, "{}", PAUSE_PROMPT)?;
        stdout.flush()?;

        {
            let _guard = RawModeGuard::enable()?;
            loop {
                // Windows reports both press and release; count the press only.
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        break;
                    }
                }
            }
        }

        writeln!(stdout)?;
        Ok(())
    }
}
