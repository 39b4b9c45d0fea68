//! Frame model: a single snapshot of the clock, rendered for display.
//!
//! All user-visible strings live here so the display layer stays a plain
//! writer and tests have one place to assert against.

use chrono::{DateTime, Local};

/// `strftime`-style format for the rendered timestamp.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label prefixed to the timestamp line.
pub const TIME_LABEL: &str = "Current time";

/// Static hint printed below the timestamp.
pub const QUIT_HINT: &str = "Press Ctrl+C to exit";

/// Notice printed once when the clock shuts down.
pub const EXIT_NOTICE: &str = "Clock exited";

/// One clock snapshot. Built fresh each cycle, drawn once, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    timestamp: String,
}

impl Frame {
    /// Snapshot the system clock in the host-local time zone.
    pub fn now() -> Frame {
        Frame::at(Local::now())
    }

    /// Build a frame for a specific instant.
    pub fn at(instant: DateTime<Local>) -> Frame {
        Frame {
            timestamp: instant.format(TIME_FORMAT).to_string(),
        }
    }

    /// The rendered `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// First display line: label plus timestamp.
    pub fn time_line(&self) -> String {
        format!("{}: {}", TIME_LABEL, self.timestamp)
    }

    /// Second display line.
    pub fn hint_line(&self) -> &'static str {
        QUIT_HINT
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;
