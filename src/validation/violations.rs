//! Content violations.

use thiserror::Error;

/// A single problem found in page content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentViolation {
    #[error("Section '{section}' must not be empty")]
    EmptySection { section: String },

    #[error("Blank {field} in {section}[{index}]")]
    BlankField {
        section: String,
        index: usize,
        field: String,
    },

    #[error("Page {field} must not be blank")]
    BlankPageField { field: String },

    #[error("Too few steps ({found}), at least {min} required")]
    TooFewSteps { min: usize, found: usize },

    #[error("Too many steps ({found}), at most {max} allowed")]
    TooManySteps { max: usize, found: usize },

    #[error("Resource id '{id}' is used more than once")]
    DuplicateResourceId { id: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
