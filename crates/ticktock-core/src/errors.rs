//! Error types for clock display failures.

use thiserror::Error;

/// The only fallible operation in this crate is writing to the terminal.
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Terminal write failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
