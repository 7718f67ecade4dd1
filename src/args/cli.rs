use clap::Parser;

use super::parsers::{parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize, Strategy};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-rate press harness - issues simulated requests at a steady QPM cadence using cooperative or thread-pool scheduling."
)]
pub struct PressArgs {
    /// Target rate (presses per minute)
    #[arg(long = "qpm", value_parser = parse_positive_u64)]
    pub qpm: PositiveU64,

    /// Run window length (seconds)
    #[arg(long = "duration")]
    pub duration: u64,

    /// Scheduling strategy
    #[arg(long = "case", value_enum)]
    pub case: Strategy,

    /// Worker pool size (only used with --case thread)
    #[arg(long = "thread_nums", value_parser = parse_positive_usize)]
    pub thread_nums: Option<PositiveUsize>,

    /// Enable verbose logging (sets log level to debug unless overridden by QPRESS_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
