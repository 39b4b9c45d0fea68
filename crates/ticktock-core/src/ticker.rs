//! The clock loop: redraws the current time once per second until shutdown.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time;

use crate::display::TerminalDisplay;
use crate::errors::Result;
use crate::frame::Frame;

/// Wall-clock delay between redraws.
pub const TICK: Duration = Duration::from_secs(1);

pub struct ClockLoop<W: Write> {
    display: TerminalDisplay<W>,
}

impl<W: Write> ClockLoop<W> {
    pub fn new(display: TerminalDisplay<W>) -> ClockLoop<W> {
        ClockLoop { display }
    }

    /// Draws a fresh frame, sleeps one second, and repeats until `shutdown`
    /// resolves.
    ///
    /// The delay is a plain fixed sleep; render latency is not compensated,
    /// so frames drift a few milliseconds per cycle relative to true
    /// wall-clock seconds. The exit notice is written exactly once, whether
    /// the shutdown arrives mid-sleep or was already pending before the
    /// first frame.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> Result<()> {
        tokio::pin!(shutdown);

        loop {
            self.display.draw(&Frame::now())?;
            log::trace!("frame drawn, sleeping {TICK:?}");

            tokio::select! {
                _ = &mut shutdown => break,
                _ = time::sleep(TICK) => {}
            }
        }

        self.display.exit_notice()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "ticker_test.rs"]
mod tests;
