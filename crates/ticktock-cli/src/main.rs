//! ticktock binary
//!
//! Redraws the current local time in the terminal once per second until the
//! process is interrupted, then prints a single exit notice and returns 0.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use ticktock_core::{ClockLoop, TerminalDisplay};

/// Command line arguments for the ticktock clock.
#[derive(Parser, Debug)]
#[command(name = "ticktock")]
#[command(about = "Shows the current local time in the terminal, refreshed once per second")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the redrawn frame on stdout stays clean; the
    // default filter keeps a normal run silent.
    let log_level_filter = args.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    log::info!("Starting terminal clock");

    let mut clock = ClockLoop::new(TerminalDisplay::stdout());
    clock.run(shutdown_signal()).await?;

    log::info!("Terminal clock shut down gracefully");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down...");
        },
    }
}
