//! Builder for constructing pages in code.

use crate::builder::error::BuildError;
use crate::core::{AccordionEntry, Card, Step};
use crate::page::Page;
use crate::resources::Resource;
use crate::validation::{violations_of, ContentRules};

/// Builder for constructing pages with a fluent API.
///
/// `build()` fails fast on a missing title or an empty step list, then runs
/// the content rules and reports every remaining violation at once.
pub struct PageBuilder {
    title: Option<String>,
    subtitle: String,
    highlights: Vec<Card>,
    steps: Vec<Step>,
    competencies: Vec<AccordionEntry>,
    benefits: Vec<Card>,
    resources: Vec<Resource>,
    credits: Vec<String>,
    rules: ContentRules,
}

impl PageBuilder {
    /// Create a new builder using the standard content rules.
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: String::new(),
            highlights: Vec::new(),
            steps: Vec::new(),
            competencies: Vec::new(),
            benefits: Vec::new(),
            resources: Vec::new(),
            credits: Vec::new(),
            rules: ContentRules::standard(),
        }
    }

    /// Set the page title (required).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn highlight(mut self, card: Card) -> Self {
        self.highlights.push(card);
        self
    }

    /// Append one step; steps keep insertion order.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps at once.
    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn competency(mut self, entry: AccordionEntry) -> Self {
        self.competencies.push(entry);
        self
    }

    pub fn competencies(mut self, entries: impl IntoIterator<Item = AccordionEntry>) -> Self {
        self.competencies.extend(entries);
        self
    }

    pub fn benefit(mut self, card: Card) -> Self {
        self.benefits.push(card);
        self
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn credit(mut self, line: impl Into<String>) -> Self {
        self.credits.push(line.into());
        self
    }

    /// Replace the content rules checked by `build()`.
    pub fn rules(mut self, rules: ContentRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the page.
    pub fn build(self) -> Result<Page, BuildError> {
        let title = self.title.ok_or(BuildError::MissingTitle)?;

        if self.steps.is_empty() {
            return Err(BuildError::NoSteps);
        }

        let page = Page {
            title,
            subtitle: self.subtitle,
            highlights: self.highlights,
            steps: self.steps,
            competencies: self.competencies,
            benefits: self.benefits,
            resources: self.resources,
            credits: self.credits,
        };

        let violations = violations_of(self.rules.enforce(&page));
        if violations.is_empty() {
            Ok(page)
        } else {
            Err(BuildError::InvalidContent { violations })
        }
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
