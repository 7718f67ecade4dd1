//! The rate-paced scheduling loop and its three concurrency strategies.
//!
//! All three strategies share the same loop shape: while the run window is
//! open, stamp the issuance start, dispatch one press, then sleep for the
//! pacing interval minus the issuance cost. They differ only in how a press
//! is dispatched and in what the pacing sleep stalls.

mod cooperative;
mod pool;


use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize, Strategy};
use crate::error::AppResult;

/// Everything a single run needs, resolved up front.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub qpm: PositiveU64,
    pub duration: Duration,
    pub strategy: Strategy,
    /// Worker pool size; only consulted by [`Strategy::Thread`].
    pub pool_size: PositiveUsize,
}

/// Issuance and drain counts observed by a completed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Presses dispatched before the window closed.
    pub issued: u64,
    /// Presses joined during the drain phase. Zero for the thread-pool
    /// strategy, which submits fire-and-forget.
    pub drained: u64,
}

/// Run the configured strategy to completion, including its drain phase.
///
/// The cooperative strategies run on a current-thread runtime so that
/// presses only progress at the issuing loop's suspension points.
///
/// # Errors
///
/// Returns an error if the cooperative runtime cannot be built.
pub fn run(config: &RunConfig) -> AppResult<RunStats> {
    match config.strategy {
        Strategy::Async => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            Ok(runtime.block_on(cooperative::run(config.qpm, config.duration)))
        }
        Strategy::AsyncTimesleep => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            Ok(runtime.block_on(cooperative::run_with_blocking_pace(
                config.qpm,
                config.duration,
            )))
        }
        Strategy::Thread => Ok(pool::run(config.qpm, config.duration, config.pool_size)),
    }
}
