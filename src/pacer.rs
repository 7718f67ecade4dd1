//! Derives the fixed issuance cadence from the target rate and tracks the
//! run window.

use std::time::Duration;

use tokio::time::Instant;

use crate::args::PositiveU64;

/// Fixed inter-issuance interval: 60/qpm seconds. Computed once per run.
pub(crate) fn interval_for(qpm: PositiveU64) -> Duration {
    Duration::from_secs_f64(60.0 / qpm.get() as f64)
}

pub(crate) struct Pacer {
    interval: Duration,
    deadline: Instant,
}

impl Pacer {
    pub(crate) fn new(qpm: PositiveU64, duration: Duration, now: Instant) -> Self {
        Self {
            interval: interval_for(qpm),
            deadline: now + duration,
        }
    }

    /// True while new presses may still be issued.
    pub(crate) fn window_open(&self, now: Instant) -> bool {
        now < self.deadline
    }

    /// Delay until the next issuance, accounting for the wall-clock cost
    /// of the issuance step itself. Never negative: a step that overruns
    /// the interval yields a zero delay, so sustained overhead drifts the
    /// cadence rather than being repaid.
    pub(crate) fn delay_after(&self, issue_cost: Duration) -> Duration {
        self.interval.saturating_sub(issue_cost)
    }
}
