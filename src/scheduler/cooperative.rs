use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::args::PositiveU64;
use crate::pacer::Pacer;
use crate::press;

use super::RunStats;

/// Single-threaded cooperative strategy: each press is spawned as a task
/// that progresses whenever the issuing loop suspends, and the pacing
/// wait is itself a suspension point. Issuance is never throttled by
/// completions, so an interval shorter than the press delay grows the
/// in-flight set for the whole window.
pub(super) async fn run(qpm: PositiveU64, duration: Duration) -> RunStats {
    let epoch = Instant::now();
    let pacer = Pacer::new(qpm, duration, epoch);
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

    while pacer.window_open(Instant::now()) {
        let started = Instant::now();
        in_flight.push(tokio::spawn(press::press(epoch, started)));
        tokio::time::sleep(pacer.delay_after(started.elapsed())).await;
    }

    drain(in_flight).await
}

/// Identical dispatch, but the pacing wait is a full blocking sleep. The
/// scheduler stalls with it, so in-flight presses first progress at the
/// loop's next suspension point, which is the drain.
pub(super) async fn run_with_blocking_pace(qpm: PositiveU64, duration: Duration) -> RunStats {
    let epoch = Instant::now();
    let pacer = Pacer::new(qpm, duration, epoch);
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

    while pacer.window_open(Instant::now()) {
        let started = Instant::now();
        in_flight.push(tokio::spawn(press::press(epoch, started)));
        std::thread::sleep(pacer.delay_after(started.elapsed()));
    }

    drain(in_flight).await
}

/// Await every dispatched press; none is abandoned at window close.
async fn drain(in_flight: Vec<JoinHandle<()>>) -> RunStats {
    let issued = in_flight.len() as u64;
    let mut drained: u64 = 0;
    for handle in in_flight {
        if handle.await.is_ok() {
            drained = drained.saturating_add(1);
        }
    }
    RunStats { issued, drained }
}
