//! Accumulating validation of page content.
//!
//! Page content comes from configuration files written by hand, so a single
//! pass reports every problem at once using Stillwater's `Validation` type
//! instead of stopping at the first error.
//!
//! # Example
//!
//! ```rust
//! use infodeck::builder::PageBuilder;
//! use infodeck::core::{AccordionEntry, Step};
//! use infodeck::validation::ContentRulesBuilder;
//!
//! let page = PageBuilder::new()
//!     .title("Excel Inteligente")
//!     .step(Step::new("Organize seus dados", "Colunas e linhas", ""))
//!     .competency(AccordionEntry::new("Análise Crítica", "Valide os resultados", ""))
//!     .build()
//!     .unwrap();
//!
//! let rules = ContentRulesBuilder::new().min_steps(3).build();
//! assert!(rules.enforce(&page).is_failure());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::ContentRulesBuilder;
pub use rules::{ContentCheck, ContentRules, ContentValidation};
pub use violations::ContentViolation;

use stillwater::validation::Validation;

/// Flatten a validation result into the list of violations it carries.
pub fn violations_of(result: ContentValidation) -> Vec<ContentViolation> {
    match result {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
