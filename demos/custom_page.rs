//! Custom Page
//!
//! This example builds a page in code instead of loading a bundled variant.
//!
//! Key concepts:
//! - Fluent page construction with `PageBuilder`
//! - Content validation that reports every violation in one pass
//! - Custom rules layered on the standard ones
//! - Recording transitions while driving the controllers
//!
//! Run with: cargo run --example custom_page

use infodeck::builder::{BuildError, PageBuilder};
use infodeck::core::{AccordionEntry, Card, Step};
use infodeck::page::{Gesture, PageView};
use infodeck::validation::ContentRulesBuilder;
use infodeck::State;

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Custom Page Example ===\n");

    // A draft with gaps: every problem is reported at once
    let draft = PageBuilder::new()
        .title("Planilhas na prática")
        .step(Step::new("Colete os dados", "", ""))
        .step(Step::new("", "Limpe as colunas", ""))
        .highlight(Card::new("Por quê?", ""))
        .build();

    match draft {
        Err(BuildError::InvalidContent { violations }) => {
            println!("Draft rejected with {} violation(s):", violations.len());
            for violation in &violations {
                println!("  - {violation}");
            }
        }
        other => println!("Unexpected result: {other:?}"),
    }

    // A complete page with a custom rule on top of the standard ones
    let rules = ContentRulesBuilder::new()
        .max_steps(4)
        .require_pred(
            |page| page.steps.iter().all(|s| !s.detail.is_empty()),
            "every step needs a detail line".to_string(),
        )
        .build();

    let page = PageBuilder::new()
        .title("Planilhas na prática")
        .subtitle("Três passos para analisar dados com IA")
        .step(Step::new("Colete os dados", "Monte a tabela", "Uma linha por registro"))
        .step(Step::new("Peça a análise", "Envie com um prompt claro", "Seja específico"))
        .step(Step::new("Discuta", "Compare com a turma", "Questione os números"))
        .competency(AccordionEntry::new("Análise Crítica", "Valide os resultados", ""))
        .competency(AccordionEntry::new("Comunicação", "Explique os achados", ""))
        .rules(rules)
        .build()
        .unwrap();

    println!("\nPage built: {} ({} steps)", page.title, page.steps.len());

    let mut view = PageView::mount(page).unwrap();
    for gesture in [
        Gesture::NextStep,
        Gesture::NextStep,
        Gesture::NextStep,
        Gesture::ToggleEntry(0),
        Gesture::ToggleEntry(1),
        Gesture::PreviousStep,
    ] {
        view.handle(gesture).unwrap();
    }

    println!("\nCarousel path:");
    for state in view.carousel().history().path() {
        println!("  {} step {}", state.name(), state.index() + 1);
    }

    if let Some(accordion) = view.accordion() {
        println!("\nAccordion transitions:");
        for transition in accordion.history().transitions() {
            println!(
                "  {:?}: {:?} -> {:?}",
                transition.trigger,
                transition.from.open_index(),
                transition.to.open_index()
            );
        }
    }

    println!("\nCurrent step: {}", view.current_step().title);
    println!("\n=== Example Complete ===");
}
