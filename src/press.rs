//! The unit of work: one simulated "press" with a fixed synthetic delay.

use std::time::Duration;

use tokio::time::Instant;

/// Simulated time taken by a single press.
pub(crate) const PRESS_DELAY: Duration = Duration::from_millis(200);

/// Suspending press for the cooperative strategies. Yields back to the
/// scheduler while the simulated work is in flight, then reports its own
/// start offset and observed latency on stdout.
pub(crate) async fn press(epoch: Instant, started: Instant) {
    tokio::time::sleep(PRESS_DELAY).await;
    let elapsed = started.elapsed();
    println!("{}", press_line(started.duration_since(epoch), elapsed));
}

/// Blocking press for the thread-pool strategy. Occupies its worker
/// thread for the full simulated delay.
pub(crate) fn press_blocking(epoch: Instant, started: Instant) {
    std::thread::sleep(PRESS_DELAY);
    let elapsed = started.elapsed();
    println!("{}", press_line(started.duration_since(epoch), elapsed));
}

/// One output line per completed press: `<start> -- <elapsed>`, both in
/// seconds on the monotonic clock relative to the run epoch.
fn press_line(start: Duration, elapsed: Duration) -> String {
    format!("{} -- {}", start.as_secs_f64(), elapsed.as_secs_f64())
}
