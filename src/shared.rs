pub mod types;
pub mod settings;
pub mod errors;
pub mod error;
pub mod logging;

#[cfg(test)]
mod types_test;

pub use error::{AppError, AppResult};
pub use errors::ConversionFailure;
pub use logging::init_tracing;
