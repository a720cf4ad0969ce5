//! Render errors.

use thiserror::Error;

/// Errors that can occur while configuring or verifying a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scene rendered incorrectly: expected checksum {expected}, got {actual}")]
    VerificationFailed { expected: i64, actual: i64 },

    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    #[error("Options parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
