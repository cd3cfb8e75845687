//! Builder API for content rules.

use crate::page::Page;
use crate::validation::rules::{ContentRules, ContentValidation};
use crate::validation::violations::ContentViolation;
use stillwater::validation::Validation;

/// Builder for [`ContentRules`], starting from the standard rule set.
pub struct ContentRulesBuilder {
    rules: ContentRules,
}

impl ContentRulesBuilder {
    pub fn new() -> Self {
        Self {
            rules: ContentRules::standard(),
        }
    }

    /// Minimum number of steps (never below one)
    pub fn min_steps(mut self, n: usize) -> Self {
        self.rules.min_steps = n.max(1);
        self
    }

    /// Maximum number of steps
    pub fn max_steps(mut self, n: usize) -> Self {
        self.rules.max_steps = Some(n);
        self
    }

    /// Accept pages without an accordion section
    pub fn allow_no_competencies(mut self) -> Self {
        self.rules.require_competencies = false;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Page) -> ContentValidation + Send + Sync + 'static,
    {
        self.rules.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Page) -> bool + Send + Sync + 'static,
    {
        let check = move |page: &Page| {
            if predicate(page) {
                Validation::success(())
            } else {
                Validation::fail(ContentViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.rules.required_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> ContentRules {
        self.rules
    }
}

impl Default for ContentRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
