use thiserror::Error;

use crate::utils::AppError;

/// Failures that stop the server process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] AppError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
