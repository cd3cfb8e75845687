//! A mounted page: content plus the controllers that drive it.

use crate::controller::{ControllerError, ExclusiveAccordion, StepCarousel};
use crate::core::{AccordionEntry, Card, Step};
use crate::page::{Page, PageError};
use crate::resources::{self, activate, Activation, Platform, Resource};
use tracing::debug;

/// User gestures a host forwards to [`PageView::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    NextStep,
    PreviousStep,
    ToggleEntry(usize),
}

/// Interactive state of one page for the lifetime of its view.
///
/// Mounting creates a fresh [`StepCarousel`] over the steps (positioned on
/// the first) and, when the page has competencies, an
/// [`ExclusiveAccordion`] with every entry closed. Dropping the view drops
/// both; nothing survives between mounts.
///
/// # Example
///
/// ```rust
/// use infodeck::page::{Gesture, PageView, Variant};
///
/// let page = Variant::StudentWalkthrough.page().unwrap();
/// let mut view = PageView::mount(page).unwrap();
///
/// view.handle(Gesture::PreviousStep).unwrap();
/// assert_eq!(view.carousel().current_index(), view.carousel().step_count() - 1);
///
/// view.handle(Gesture::ToggleEntry(1)).unwrap();
/// assert!(view.is_entry_open(1));
/// ```
#[derive(Debug)]
pub struct PageView {
    title: String,
    subtitle: String,
    highlights: Vec<Card>,
    benefits: Vec<Card>,
    resources: Vec<Resource>,
    credits: Vec<String>,
    carousel: StepCarousel<Step>,
    accordion: Option<ExclusiveAccordion<AccordionEntry>>,
}

impl PageView {
    /// Mount `page`, taking ownership of its content.
    ///
    /// Fails with [`ControllerError::InvalidConfiguration`] when the page
    /// has no steps.
    pub fn mount(page: Page) -> Result<Self, ControllerError> {
        let Page {
            title,
            subtitle,
            highlights,
            steps,
            competencies,
            benefits,
            resources,
            credits,
        } = page;

        let carousel = StepCarousel::new(steps)?;
        let accordion = if competencies.is_empty() {
            None
        } else {
            Some(ExclusiveAccordion::new(competencies)?)
        };

        debug!(
            %title,
            steps = carousel.step_count(),
            entries = accordion.as_ref().map_or(0, |a| a.entry_count()),
            "page mounted"
        );

        Ok(Self {
            title,
            subtitle,
            highlights,
            benefits,
            resources,
            credits,
            carousel,
            accordion,
        })
    }

    /// Apply a user gesture to the matching controller.
    pub fn handle(&mut self, gesture: Gesture) -> Result<(), ControllerError> {
        match gesture {
            Gesture::NextStep => {
                self.carousel.next();
            }
            Gesture::PreviousStep => {
                self.carousel.previous();
            }
            Gesture::ToggleEntry(index) => match self.accordion.as_mut() {
                Some(accordion) => {
                    accordion.toggle(index)?;
                }
                None => return Err(ControllerError::IndexOutOfRange { index, len: 0 }),
            },
        }
        Ok(())
    }

    /// Run the resource with `id` against `platform`.
    pub fn activate<P>(&self, id: &str, platform: &mut P) -> Result<Activation, PageError>
    where
        P: Platform + ?Sized,
    {
        let resource = self
            .resource(id)
            .ok_or_else(|| PageError::UnknownResource { id: id.to_string() })?;
        Ok(activate(resource, platform)?)
    }

    pub fn is_entry_open(&self, index: usize) -> bool {
        self.accordion
            .as_ref()
            .is_some_and(|accordion| accordion.is_open(index))
    }

    pub fn carousel(&self) -> &StepCarousel<Step> {
        &self.carousel
    }

    pub fn accordion(&self) -> Option<&ExclusiveAccordion<AccordionEntry>> {
        self.accordion.as_ref()
    }

    pub fn current_step(&self) -> &Step {
        self.carousel.current()
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        resources::find(&self.resources, id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn highlights(&self) -> &[Card] {
        &self.highlights
    }

    pub fn benefits(&self) -> &[Card] {
        &self.benefits
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn credits(&self) -> &[String] {
        &self.credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PageBuilder;
    use crate::resources::DirectoryPlatform;
    use crate::validation::ContentRulesBuilder;

    fn three_step_page() -> Page {
        PageBuilder::new()
            .title("Excel Inteligente")
            .step(Step::new("Organize", "Planilha simples", ""))
            .step(Step::new("Exporte", "CSV ou XLSX", ""))
            .step(Step::new("Pergunte", "Prompt claro", ""))
            .competency(AccordionEntry::new("Análise", "Questione", ""))
            .competency(AccordionEntry::new("Comunicação", "Explique", ""))
            .resource(Resource::Clipboard {
                id: "prompt".into(),
                label: "Copiar Prompt".into(),
                text: "Analise esta planilha".into(),
                confirmation: Some("Prompt copiado!".into()),
            })
            .build()
            .unwrap()
    }

    #[test]
    fn mount_starts_on_first_step_with_everything_closed() {
        let view = PageView::mount(three_step_page()).unwrap();

        assert_eq!(view.title(), "Excel Inteligente");
        assert_eq!(view.current_step().title, "Organize");
        assert_eq!(view.accordion().unwrap().open_index(), None);
    }

    #[test]
    fn gestures_drive_controllers() {
        let mut view = PageView::mount(three_step_page()).unwrap();

        view.handle(Gesture::NextStep).unwrap();
        view.handle(Gesture::NextStep).unwrap();
        assert_eq!(view.current_step().title, "Pergunte");
        view.handle(Gesture::NextStep).unwrap();
        assert_eq!(view.current_step().title, "Organize");

        view.handle(Gesture::ToggleEntry(0)).unwrap();
        view.handle(Gesture::ToggleEntry(1)).unwrap();
        assert!(!view.is_entry_open(0));
        assert!(view.is_entry_open(1));
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut view = PageView::mount(three_step_page()).unwrap();
        assert_eq!(
            view.handle(Gesture::ToggleEntry(2)),
            Err(ControllerError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn page_without_competencies_has_no_accordion() {
        let rules = ContentRulesBuilder::new().allow_no_competencies().build();
        let page = PageBuilder::new()
            .title("Só passos")
            .step(Step::new("Único", "Passo", ""))
            .rules(rules)
            .build()
            .unwrap();

        let mut view = PageView::mount(page).unwrap();
        assert!(view.accordion().is_none());
        assert!(!view.is_entry_open(0));
        assert_eq!(
            view.handle(Gesture::ToggleEntry(0)),
            Err(ControllerError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn mount_rejects_page_without_steps() {
        let mut page = three_step_page();
        page.steps.clear();

        assert!(matches!(
            PageView::mount(page),
            Err(ControllerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn activate_runs_resource_on_platform() {
        let view = PageView::mount(three_step_page()).unwrap();
        let mut platform = DirectoryPlatform::new("unused");

        let outcome = view.activate("prompt", &mut platform).unwrap();

        assert_eq!(outcome, Activation::Copied { chars: 21 });
        assert_eq!(platform.clipboard(), Some("Analise esta planilha"));
        assert_eq!(platform.notifications(), ["Prompt copiado!".to_string()]);
    }

    #[test]
    fn activate_unknown_resource_fails() {
        let view = PageView::mount(three_step_page()).unwrap();
        let mut platform = DirectoryPlatform::new("unused");

        assert!(matches!(
            view.activate("manual", &mut platform),
            Err(PageError::UnknownResource { id }) if id == "manual"
        ));
    }

    #[test]
    fn view_and_page_resolve_resources_alike() {
        let page = three_step_page();
        let view = PageView::mount(page.clone()).unwrap();

        for id in ["prompt", "manual"] {
            assert_eq!(view.resource(id), page.resource(id));
        }
        assert_eq!(view.resource("prompt").map(Resource::label), Some("Copiar Prompt"));
    }
}
