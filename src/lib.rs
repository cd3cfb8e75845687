//! Infodeck: pure state controllers for step-by-step infographic pages
//!
//! An infographic page walks a reader through a fixed sequence of steps and
//! a list of collapsible entries. Infodeck keeps the interactive part as two
//! small state machines and treats everything else as configuration data.
//!
//! # Core Concepts
//!
//! - **StepCarousel**: one current step, next/previous with wraparound
//! - **ExclusiveAccordion**: at most one open entry, changed by toggle
//! - **Page**: content loaded from TOML/JSON and validated in one pass
//! - **Platform**: the host services behind download/copy/link actions
//!
//! # Example
//!
//! ```rust
//! use infodeck::controller::{ControllerError, ExclusiveAccordion, StepCarousel};
//! use infodeck::core::{AccordionEntry, Step};
//!
//! let mut carousel = StepCarousel::new(vec![
//!     Step::new("Organize seus dados", "Colunas e linhas", ""),
//!     Step::new("Exporte para CSV", "Formato universal", ""),
//! ])
//! .unwrap();
//! carousel.next();
//! carousel.next();
//! assert_eq!(carousel.current_index(), 0);
//!
//! let mut accordion = ExclusiveAccordion::new(vec![
//!     AccordionEntry::new("Análise Crítica", "Valide os resultados", ""),
//!     AccordionEntry::new("Comunicação de Dados", "Explique os achados", ""),
//! ])
//! .unwrap();
//! accordion.toggle(1).unwrap();
//! assert!(accordion.is_open(1));
//! assert_eq!(
//!     accordion.toggle(7),
//!     Err(ControllerError::IndexOutOfRange { index: 7, len: 2 })
//! );
//! ```

pub mod builder;
pub mod controller;
pub mod core;
pub mod page;
pub mod resources;
pub mod validation;

// Re-export commonly used types
pub use self::controller::{ControllerError, ExclusiveAccordion, StepCarousel};
pub use self::core::{AccordionEntry, State, Step};
pub use self::page::{Page, PageView, Variant};
