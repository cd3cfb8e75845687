//! Immutable content records shown by the controllers.
//!
//! Records are fixed when a page is loaded and identified by their position
//! in the owning sequence.

use serde::{Deserialize, Serialize};

/// One instructional card of the step-by-step walkthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    /// Secondary line shown under the description
    #[serde(default)]
    pub detail: String,
}

impl Step {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            detail: detail.into(),
        }
    }

    /// Heading with the 1-based step number prefixed, e.g. `"2. Export"`.
    pub fn numbered_title(&self, position: usize) -> String {
        format!("{}. {}", position + 1, self.title)
    }
}

/// One collapsible block of an accordion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionEntry {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub example: String,
}

impl AccordionEntry {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            example: example.into(),
        }
    }

    pub fn has_example(&self) -> bool {
        !self.example.trim().is_empty()
    }
}

/// Static title/body card (context highlights, benefit grid).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_title_is_one_based() {
        let step = Step::new("Export to CSV", "Save the sheet", "");
        assert_eq!(step.numbered_title(0), "1. Export to CSV");
        assert_eq!(step.numbered_title(4), "5. Export to CSV");
    }

    #[test]
    fn detail_and_example_default_when_missing() {
        let step: Step =
            serde_json::from_str(r#"{"title":"Organize","description":"Rows and columns"}"#)
                .unwrap();
        assert!(step.detail.is_empty());

        let entry: AccordionEntry =
            serde_json::from_str(r#"{"title":"Critical analysis","body":"Question results"}"#)
                .unwrap();
        assert!(!entry.has_example());
    }

    #[test]
    fn has_example_ignores_whitespace() {
        let entry = AccordionEntry::new("Title", "Body", "   ");
        assert!(!entry.has_example());

        let entry = AccordionEntry::new("Title", "Body", "Check the totals");
        assert!(entry.has_example());
    }
}
