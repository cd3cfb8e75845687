//! Loading pages from configuration files.

use crate::controller::ControllerError;
use crate::page::Page;
use crate::resources::PlatformError;
use crate::validation::{ContentRules, ContentViolation};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading, mounting or driving a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read page file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML page: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON page: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported page format '{extension}', expected .toml or .json")]
    UnsupportedFormat { extension: String },

    #[error("Invalid page content: {}", join_violations(.violations))]
    InvalidContent { violations: Vec<ContentViolation> },

    #[error("Unknown page variant '{name}'")]
    UnknownVariant { name: String },

    #[error("Unknown resource '{id}'")]
    UnknownResource { id: String },

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

fn join_violations(violations: &[ContentViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Page {
    /// Parse a TOML page and validate it with the standard rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use infodeck::page::Page;
    ///
    /// let page = Page::from_toml_str(r#"
    ///     title = "Excel Inteligente"
    ///
    ///     [[steps]]
    ///     title = "Organize seus dados"
    ///     description = "Colunas e linhas"
    ///
    ///     [[competencies]]
    ///     title = "Análise Crítica"
    ///     body = "Questione os resultados da IA"
    /// "#).unwrap();
    ///
    /// assert_eq!(page.steps.len(), 1);
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, PageError> {
        Self::from_toml_str_with(raw, &ContentRules::standard())
    }

    pub fn from_toml_str_with(raw: &str, rules: &ContentRules) -> Result<Self, PageError> {
        let page: Page = toml::from_str(raw)?;
        page.validate(rules)?;
        Ok(page)
    }

    /// Parse a JSON page and validate it with the standard rules.
    pub fn from_json_str(raw: &str) -> Result<Self, PageError> {
        Self::from_json_str_with(raw, &ContentRules::standard())
    }

    pub fn from_json_str_with(raw: &str, rules: &ContentRules) -> Result<Self, PageError> {
        let page: Page = serde_json::from_str(raw)?;
        page.validate(rules)?;
        Ok(page)
    }

    /// Load a page file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        Self::load_with(path, &ContentRules::standard())
    }

    pub fn load_with(path: impl AsRef<Path>, rules: &ContentRules) -> Result<Self, PageError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        // Reject before touching the file system
        if extension != "toml" && extension != "json" {
            return Err(PageError::UnsupportedFormat { extension });
        }

        let raw = fs::read_to_string(path)?;
        debug!(path = %path.display(), %extension, "loading page");

        if extension == "toml" {
            Self::from_toml_str_with(&raw, rules)
        } else {
            Self::from_json_str_with(&raw, rules)
        }
    }
}
