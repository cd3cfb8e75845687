//! Page content supplied as configuration data.
//!
//! A [`Page`] holds everything a host needs to render one infographic page
//! variant. Pages are loaded from TOML or JSON ([`config`]), validated with
//! [`ContentRules`](crate::validation::ContentRules), and mounted into a
//! [`PageView`] that owns the interactive controllers.

pub mod config;
pub mod presets;
pub mod view;

pub use config::PageError;
pub use presets::Variant;
pub use view::{Gesture, PageView};

use crate::core::{AccordionEntry, Card, Step};
use crate::resources::{self, Resource};
use crate::validation::{violations_of, ContentRules};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Content of one page variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Context cards shown above the walkthrough
    #[serde(default)]
    pub highlights: Vec<Card>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Accordion entries
    #[serde(default)]
    pub competencies: Vec<AccordionEntry>,
    #[serde(default)]
    pub benefits: Vec<Card>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub credits: Vec<String>,
}

impl Page {
    /// Check the page against `rules`, failing with every violation found.
    pub fn validate(&self, rules: &ContentRules) -> Result<(), PageError> {
        let violations = violations_of(rules.enforce(self));
        if violations.is_empty() {
            return Ok(());
        }

        warn!(
            title = %self.title,
            count = violations.len(),
            "page content failed validation"
        );
        Err(PageError::InvalidContent { violations })
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        resources::find(&self.resources, id)
    }
}
