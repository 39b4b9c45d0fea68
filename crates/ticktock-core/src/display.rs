//! Terminal display: redraws the clock frame in place.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::errors::Result;
use crate::frame::{Frame, EXIT_NOTICE};

/// Writes clock frames to a terminal-like sink.
///
/// Generic over the sink so tests can capture output in a buffer; production
/// code uses [`TerminalDisplay::stdout`].
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> TerminalDisplay<Stdout> {
        TerminalDisplay { out: io::stdout() }
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> TerminalDisplay<W> {
        TerminalDisplay { out }
    }

    /// Clears the display and draws the two-line frame at the origin, so
    /// each frame visually overwrites the previous one.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "{}", frame.time_line())?;
        writeln!(self.out, "{}", frame.hint_line())?;
        self.out.flush()?;
        Ok(())
    }

    /// Writes the shutdown notice below the last frame.
    pub fn exit_notice(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", EXIT_NOTICE)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
