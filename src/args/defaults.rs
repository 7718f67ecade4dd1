use std::num::NonZeroUsize;

/// Pool size used when `--thread_nums` is not given.
const FALLBACK_POOL_SIZE: usize = 4;

#[must_use]
pub fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(FALLBACK_POOL_SIZE)
}
