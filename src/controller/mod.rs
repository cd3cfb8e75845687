//! Stateful UI controllers.
//!
//! Both controllers are synchronous state machines over a fixed sequence
//! supplied at construction:
//!
//! - **StepCarousel**: one current item, next/previous with wraparound
//! - **ExclusiveAccordion**: at most one open entry, changed only by toggle
//!
//! The host UI reads their state to decide what to draw and calls the
//! mutating operations from its input handlers. Neither controller does I/O.

mod accordion;
mod carousel;
mod error;

pub use accordion::{AccordionState, EntryState, ExclusiveAccordion};
pub use carousel::{CarouselState, StepCarousel};
pub use error::ControllerError;

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ControllerError> {
    if index < len {
        Ok(())
    } else {
        Err(ControllerError::IndexOutOfRange { index, len })
    }
}
