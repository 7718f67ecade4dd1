use std::time::Duration;

use clap::Parser;
use tracing::{debug, warn};

use crate::args::{default_pool_size, PositiveUsize, PressArgs, Strategy};
use crate::error::{AppError, AppResult};
use crate::scheduler::{self, RunConfig};

pub(crate) fn run() -> AppResult<()> {
    let args = PressArgs::parse();
    crate::logger::init_logging(args.verbose);

    let config = build_config(&args)?;
    debug!(
        qpm = config.qpm.get(),
        duration_secs = config.duration.as_secs(),
        strategy = config.strategy.as_str(),
        "Starting run"
    );

    let stats = scheduler::run(&config)?;
    debug!(
        issued = stats.issued,
        drained = stats.drained,
        "Run complete"
    );
    Ok(())
}

fn build_config(args: &PressArgs) -> AppResult<RunConfig> {
    if args.thread_nums.is_some() && args.case != Strategy::Thread {
        warn!("--thread_nums is ignored unless --case thread is set.");
    }

    let pool_size = match args.thread_nums {
        Some(size) => size,
        None => PositiveUsize::try_from(default_pool_size()).map_err(AppError::validation)?,
    };

    Ok(RunConfig {
        qpm: args.qpm,
        duration: Duration::from_secs(args.duration),
        strategy: args.case,
        pool_size,
    })
}
