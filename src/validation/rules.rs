//! Content rules evaluated with accumulating validation.

use crate::page::Page;
use crate::resources::Resource;
use crate::validation::violations::ContentViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking a page: success, or every violation found.
pub type ContentValidation = Validation<(), NonEmptyVec<ContentViolation>>;

/// Type alias for custom content checks.
pub type ContentCheck = Box<dyn Fn(&Page) -> ContentValidation + Send + Sync>;

/// Rules a page must satisfy before it can be mounted.
///
/// Blank-field and duplicate-id checks always run; step bounds, the
/// competency requirement and custom checks are configurable through
/// [`ContentRulesBuilder`](crate::validation::ContentRulesBuilder).
pub struct ContentRules {
    pub(crate) min_steps: usize,
    pub(crate) max_steps: Option<usize>,
    pub(crate) require_competencies: bool,
    pub(crate) required_checks: Vec<ContentCheck>,
}

impl Default for ContentRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl ContentRules {
    /// At least one step and one competency, no other limits.
    pub fn standard() -> Self {
        Self {
            min_steps: 1,
            max_steps: None,
            require_competencies: true,
            required_checks: Vec::new(),
        }
    }

    /// Check `page`, accumulating ALL violations.
    pub fn enforce(&self, page: &Page) -> ContentValidation {
        let mut checks: Vec<ContentValidation> = vec![
            check_page_field("title", &page.title),
            check_step_count(page.steps.len(), self.min_steps, self.max_steps),
        ];

        if self.require_competencies && page.competencies.is_empty() {
            checks.push(Validation::fail(ContentViolation::EmptySection {
                section: "competencies".to_string(),
            }));
        }

        for (index, step) in page.steps.iter().enumerate() {
            checks.push(check_field("steps", index, "title", &step.title));
            checks.push(check_field("steps", index, "description", &step.description));
        }

        for (index, entry) in page.competencies.iter().enumerate() {
            checks.push(check_field("competencies", index, "title", &entry.title));
            checks.push(check_field("competencies", index, "body", &entry.body));
        }

        for (section, cards) in [("highlights", &page.highlights), ("benefits", &page.benefits)] {
            for (index, card) in cards.iter().enumerate() {
                checks.push(check_field(section, index, "title", &card.title));
                checks.push(check_field(section, index, "body", &card.body));
            }
        }

        for (index, resource) in page.resources.iter().enumerate() {
            checks.extend(check_resource(index, resource));
        }
        checks.extend(check_unique_ids(&page.resources));

        for check_fn in &self.required_checks {
            checks.push(check_fn(page));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_page_field(field: &str, value: &str) -> ContentValidation {
    if value.trim().is_empty() {
        Validation::fail(ContentViolation::BlankPageField {
            field: field.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_field(section: &str, index: usize, field: &str, value: &str) -> ContentValidation {
    if value.trim().is_empty() {
        Validation::fail(ContentViolation::BlankField {
            section: section.to_string(),
            index,
            field: field.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_step_count(found: usize, min: usize, max: Option<usize>) -> ContentValidation {
    if found == 0 {
        return Validation::fail(ContentViolation::EmptySection {
            section: "steps".to_string(),
        });
    }
    if found < min {
        return Validation::fail(ContentViolation::TooFewSteps { min, found });
    }
    match max {
        Some(max) if found > max => Validation::fail(ContentViolation::TooManySteps { max, found }),
        _ => Validation::success(()),
    }
}

fn check_resource(index: usize, resource: &Resource) -> Vec<ContentValidation> {
    let mut checks = vec![
        check_field("resources", index, "id", resource.id()),
        check_field("resources", index, "label", resource.label()),
    ];

    match resource {
        Resource::Download {
            filename,
            media_type,
            ..
        } => {
            checks.push(check_field("resources", index, "filename", filename));
            checks.push(check_field("resources", index, "media_type", media_type));
        }
        Resource::Clipboard { text, .. } => {
            checks.push(check_field("resources", index, "text", text));
        }
        Resource::Link { href, .. } => {
            checks.push(check_field("resources", index, "href", href));
        }
    }

    checks
}

fn check_unique_ids(resources: &[Resource]) -> Vec<ContentValidation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    resources
        .iter()
        .map(Resource::id)
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .map(|id| {
            Validation::fail(ContentViolation::DuplicateResourceId { id: id.to_string() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccordionEntry, Card, Step};
    use crate::validation::builder::ContentRulesBuilder;
    use crate::validation::violations_of;

    fn valid_page() -> Page {
        Page {
            title: "Excel Inteligente".into(),
            subtitle: "Intervenção pedagógica com IA".into(),
            highlights: vec![Card::new("O Contexto", "Fórmulas complexas desmotivam")],
            steps: vec![
                Step::new("Organize seus dados", "Colunas e linhas", ""),
                Step::new("Exporte para CSV", "Formato universal", ""),
            ],
            competencies: vec![AccordionEntry::new(
                "Análise Crítica",
                "Questionar resultados",
                "",
            )],
            benefits: Vec::new(),
            resources: vec![Resource::Link {
                id: "manual".into(),
                label: "Manual".into(),
                href: "/manual.pdf".into(),
                filename: None,
            }],
            credits: Vec::new(),
        }
    }

    #[test]
    fn valid_page_passes_standard_rules() {
        let result = ContentRules::standard().enforce(&valid_page());
        assert!(result.is_success());
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let mut page = valid_page();
        page.title = "  ".into();
        page.steps.clear();
        page.competencies.clear();
        page.highlights[0].body = String::new();

        let found = violations_of(ContentRules::standard().enforce(&page));

        assert_eq!(found.len(), 4);
        assert!(found.contains(&ContentViolation::BlankPageField {
            field: "title".into()
        }));
        assert!(found.contains(&ContentViolation::EmptySection {
            section: "steps".into()
        }));
        assert!(found.contains(&ContentViolation::EmptySection {
            section: "competencies".into()
        }));
        assert!(found.contains(&ContentViolation::BlankField {
            section: "highlights".into(),
            index: 0,
            field: "body".into(),
        }));
    }

    #[test]
    fn blank_step_fields_report_their_position() {
        let mut page = valid_page();
        page.steps[1].description = String::new();

        let found = violations_of(ContentRules::standard().enforce(&page));
        assert_eq!(
            found,
            vec![ContentViolation::BlankField {
                section: "steps".into(),
                index: 1,
                field: "description".into(),
            }]
        );
    }

    #[test]
    fn duplicate_resource_ids_are_reported_once() {
        let mut page = valid_page();
        let manual = page.resources[0].clone();
        page.resources.push(manual.clone());
        page.resources.push(manual);

        let found = violations_of(ContentRules::standard().enforce(&page));
        assert_eq!(
            found,
            vec![ContentViolation::DuplicateResourceId {
                id: "manual".into()
            }]
        );
    }

    #[test]
    fn blank_download_fields_are_reported() {
        let mut page = valid_page();
        page.resources.push(Resource::Download {
            id: "csv".into(),
            label: "CSV".into(),
            filename: String::new(),
            media_type: "text/csv".into(),
            content: String::new(),
        });

        let found = violations_of(ContentRules::standard().enforce(&page));
        assert_eq!(
            found,
            vec![ContentViolation::BlankField {
                section: "resources".into(),
                index: 1,
                field: "filename".into(),
            }]
        );
    }

    #[test]
    fn step_bounds_are_enforced() {
        let page = valid_page();

        let too_few = ContentRulesBuilder::new().min_steps(3).build();
        assert_eq!(
            violations_of(too_few.enforce(&page)),
            vec![ContentViolation::TooFewSteps { min: 3, found: 2 }]
        );

        let too_many = ContentRulesBuilder::new().max_steps(1).build();
        assert_eq!(
            violations_of(too_many.enforce(&page)),
            vec![ContentViolation::TooManySteps { max: 1, found: 2 }]
        );
    }

    #[test]
    fn competencies_can_be_optional() {
        let mut page = valid_page();
        page.competencies.clear();

        let rules = ContentRulesBuilder::new().allow_no_competencies().build();
        assert!(rules.enforce(&page).is_success());
    }

    #[test]
    fn custom_checks_run_after_builtin_checks() {
        let rules = ContentRulesBuilder::new()
            .require_pred(
                |page| page.resources.len() >= 2,
                "at least two resources".to_string(),
            )
            .build();

        let found = violations_of(rules.enforce(&valid_page()));
        assert_eq!(
            found,
            vec![ContentViolation::CustomCheckFailed {
                message: "at least two resources".into()
            }]
        );
    }
}
