//! Platform boundary errors.

use thiserror::Error;

/// Errors raised by a [`Platform`](super::Platform) while carrying out a
/// resource action.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Download names must be a bare file name, never a path
    #[error("Invalid download file name '{filename}'")]
    InvalidFilename { filename: String },
}
