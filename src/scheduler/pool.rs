use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tokio::time::Instant;

use crate::args::{PositiveU64, PositiveUsize};
use crate::pacer::Pacer;
use crate::press;

use super::RunStats;

/// Thread-pool strategy: blocking presses handed to a fixed-size worker
/// pool. Submission returns immediately and no handle is kept, so the
/// issuing loop never waits on a worker; with an interval shorter than
/// the press delay the queue grows for the whole window. Pool shutdown
/// still runs everything that was submitted before returning.
pub(super) fn run(qpm: PositiveU64, duration: Duration, pool_size: PositiveUsize) -> RunStats {
    let epoch = Instant::now();
    let pacer = Pacer::new(qpm, duration, epoch);
    let pool = WorkerPool::spawn(pool_size, epoch);
    let mut issued: u64 = 0;

    while pacer.window_open(Instant::now()) {
        let started = Instant::now();
        pool.submit(started);
        issued = issued.saturating_add(1);
        thread::sleep(pacer.delay_after(started.elapsed()));
    }

    pool.shutdown();

    // Fire-and-forget: submitted presses are cleaned up by the pool, not
    // drained by the scheduler, so none count as drained.
    RunStats { issued, drained: 0 }
}

/// Fixed set of worker threads pulling press start-stamps off a shared
/// queue. The receiver sits behind a mutex so any idle worker can take
/// the next submission.
struct WorkerPool {
    submit_tx: mpsc::Sender<Instant>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    fn spawn(size: PositiveUsize, epoch: Instant) -> Self {
        let (submit_tx, jobs) = mpsc::channel::<Instant>();
        let jobs = Arc::new(Mutex::new(jobs));

        let workers = (0..size.get())
            .map(|_| {
                let jobs = Arc::clone(&jobs);
                thread::spawn(move || {
                    loop {
                        let job = match jobs.lock() {
                            Ok(queue) => queue.recv(),
                            Err(_) => break,
                        };
                        match job {
                            Ok(started) => press::press_blocking(epoch, started),
                            Err(_) => break,
                        }
                    }
                })
            })
            .collect();

        Self { submit_tx, workers }
    }

    fn submit(&self, started: Instant) {
        // Send only fails if every worker is gone, and workers only exit
        // at shutdown.
        drop(self.submit_tx.send(started));
    }

    /// Closes the queue and waits for queued and running presses to
    /// finish. A cleanup contract, not a scheduling guarantee.
    fn shutdown(self) {
        drop(self.submit_tx);
        for worker in self.workers {
            drop(worker.join());
        }
    }
}
