//! Build errors for the page builder.

use crate::validation::ContentViolation;
use thiserror::Error;

/// Errors that can occur when building a page.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Page title not specified. Call .title(text) before .build()")]
    MissingTitle,

    #[error("No steps defined. Add at least one step")]
    NoSteps,

    #[error("Page content failed validation with {} violation(s)", .violations.len())]
    InvalidContent { violations: Vec<ContentViolation> },
}
