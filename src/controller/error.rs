//! Controller errors.

use thiserror::Error;

/// Errors raised by controller construction and index-taking operations.
///
/// Both are caller mistakes; they are returned immediately and never
/// clamped into a valid value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ControllerError {
    pub(crate) fn empty(what: &str) -> Self {
        Self::InvalidConfiguration {
            reason: format!("{what} requires at least one item"),
        }
    }
}
