//! Core controller types.
//!
//! This module contains the pure pieces shared by every controller:
//! - State values via the `State` trait
//! - Immutable transition history
//! - The content records controllers display
//!
//! Nothing in this module performs I/O.

mod content;
mod history;
mod state;

pub use content::{AccordionEntry, Card, Step};
pub use history::{StateHistory, StateTransition, Trigger};
pub use state::State;
