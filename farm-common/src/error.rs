//! Common error types for farm crates

use thiserror::Error;

/// Common result type for farm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across farm crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
