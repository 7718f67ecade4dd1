mod app;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use validation::ValidationError;
