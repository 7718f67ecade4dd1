//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::PressArgs;
pub use defaults::default_pool_size;
pub use types::{PositiveU64, PositiveUsize, Strategy};
