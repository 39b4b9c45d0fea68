use std::future;
use std::io;

use super::*;
use crate::errors::ClockError;

#[tokio::test(start_paused = true)]
async fn draws_one_frame_per_second_until_shutdown() {
    let mut buffer: Vec<u8> = Vec::new();
    let mut clock = ClockLoop::new(TerminalDisplay::new(&mut buffer));

    // Shutdown lands mid-way through the fourth sleep, so frames are drawn
    // at t = 0s, 1s, 2s and 3s of virtual time.
    clock
        .run(time::sleep(Duration::from_millis(3500)))
        .await
        .unwrap();
    drop(clock);

    let output = String::from_utf8(buffer).unwrap();
    assert_eq!(output.matches("Press Ctrl+C to exit\n").count(), 4);
    assert_eq!(output.matches("Clock exited").count(), 1);
    assert!(output.ends_with("\nClock exited\n"));
}

#[tokio::test]
async fn pending_shutdown_still_yields_one_frame_and_one_notice() {
    let mut buffer: Vec<u8> = Vec::new();
    let mut clock = ClockLoop::new(TerminalDisplay::new(&mut buffer));

    clock.run(future::ready(())).await.unwrap();
    drop(clock);

    let output = String::from_utf8(buffer).unwrap();
    assert_eq!(output.matches("Current time: ").count(), 1);
    assert_eq!(output.matches("Clock exited").count(), 1);
}

#[tokio::test]
async fn nothing_is_written_after_the_exit_notice() {
    let mut buffer: Vec<u8> = Vec::new();
    let mut clock = ClockLoop::new(TerminalDisplay::new(&mut buffer));

    clock.run(future::ready(())).await.unwrap();
    drop(clock);

    let output = String::from_utf8(buffer).unwrap();
    let (_, after) = output.split_once("Clock exited").unwrap();
    assert_eq!(after, "\n");
}

struct BrokenTerminal;

impl io::Write for BrokenTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn terminal_write_failure_surfaces_as_an_error() {
    let mut clock = ClockLoop::new(TerminalDisplay::new(BrokenTerminal));

    let err = clock.run(future::pending()).await.unwrap_err();
    assert!(matches!(err, ClockError::Terminal(_)));
}
