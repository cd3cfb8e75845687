//! Terminal Walkthrough
//!
//! This example mounts a bundled page variant and drives it from stdin.
//!
//! Commands:
//! - `n` / `p`: next / previous step
//! - `t <index>`: toggle a competency
//! - `a <resource-id>`: activate a resource (downloads go to a temp dir)
//! - `q`: quit
//!
//! Run with: cargo run --example walkthrough -- student-walkthrough

use infodeck::page::{Gesture, PageView, Variant};
use infodeck::resources::DirectoryPlatform;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn render(view: &PageView) {
    let carousel = view.carousel();
    let index = carousel.current_index();
    let step = view.current_step();

    let dots: String = carousel
        .indicators()
        .map(|(_, active)| if active { '●' } else { '○' })
        .collect();

    println!("\n{dots}");
    println!("{}", step.numbered_title(index));
    println!("  {}", step.description);
    if !step.detail.is_empty() {
        println!("  {}", step.detail);
    }

    if let Some(accordion) = view.accordion() {
        println!("\nCompetências:");
        for (i, entry) in accordion.entries().iter().enumerate() {
            let marker = if accordion.is_open(i) { 'v' } else { '>' };
            println!("  [{i}] {marker} {}", entry.title);
            if accordion.is_open(i) {
                println!("        {}", entry.body);
                if entry.has_example() {
                    println!("        Exemplo: {}", entry.example);
                }
            }
        }
    }

    println!("\nRecursos:");
    for resource in view.resources() {
        println!("  {} ({})", resource.id(), resource.label());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let variant: Variant = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Variant::StudentWalkthrough,
    };

    let mut view = PageView::mount(variant.page()?)?;
    let mut platform = DirectoryPlatform::new(std::env::temp_dir().join("infodeck-downloads"));

    println!("=== {} ===", view.title());
    println!("{}", view.subtitle());
    for card in view.highlights() {
        println!("\n# {}\n{}", card.title, card.body);
    }
    render(&view);

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let result: Result<(), Box<dyn Error>> = match (parts.next(), parts.next()) {
            (Some("q"), _) => break,
            (Some("n"), _) => view.handle(Gesture::NextStep).map_err(Into::into),
            (Some("p"), _) => view.handle(Gesture::PreviousStep).map_err(Into::into),
            (Some("t"), Some(arg)) => match arg.parse::<usize>() {
                Ok(index) => view.handle(Gesture::ToggleEntry(index)).map_err(Into::into),
                Err(err) => Err(Box::new(err) as Box<dyn Error>),
            },
            (Some("a"), Some(id)) => view
                .activate(id, &mut platform)
                .map(|outcome| println!("{outcome:?}"))
                .map_err(Into::into),
            _ => {
                println!("commands: n, p, t <index>, a <resource-id>, q");
                continue;
            }
        };

        match result {
            Ok(()) => render(&view),
            Err(err) => println!("error: {err}"),
        }
    }

    if let Some(text) = platform.clipboard() {
        println!("\nClipboard:\n{text}");
    }
    for message in platform.notifications() {
        println!("{message}");
    }
    println!(
        "\nDownloads, if any, were written to {}",
        platform.root().display()
    );
    Ok(())
}
