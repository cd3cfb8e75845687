//! Accordion that keeps at most one entry open.

use crate::controller::{check_index, ControllerError};
use crate::core::{AccordionEntry, State, StateHistory, StateTransition, Trigger};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

crate::state_enum! {
    /// Logical state of a single accordion entry.
    pub enum EntryState {
        Closed,
        Open,
    }
}

/// Container-level accordion state: which entry, if any, is open.
///
/// A single optional index rather than a set, so opening one entry closes
/// the previous one without an explicit close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionState {
    open_index: Option<usize>,
}

impl AccordionState {
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }
}

impl State for AccordionState {
    fn name(&self) -> &str {
        match self.open_index {
            Some(_) => "EntryOpen",
            None => "AllClosed",
        }
    }
}

/// Fixed list of entries with at most one open at any time.
///
/// # Example
///
/// ```rust
/// use infodeck::controller::ExclusiveAccordion;
/// use infodeck::core::AccordionEntry;
///
/// let mut accordion = ExclusiveAccordion::new(vec![
///     AccordionEntry::new("Critical analysis", "Validate AI output", ""),
///     AccordionEntry::new("Data communication", "Explain findings", ""),
///     AccordionEntry::new("AI collaboration", "Write clear prompts", ""),
/// ])
/// .unwrap();
///
/// accordion.toggle(0).unwrap();
/// accordion.toggle(2).unwrap();
/// assert!(!accordion.is_open(0));
/// assert!(accordion.is_open(2));
///
/// assert!(accordion.toggle(5).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ExclusiveAccordion<T = AccordionEntry> {
    entries: Vec<T>,
    state: AccordionState,
    history: StateHistory<AccordionState>,
}

impl<T> ExclusiveAccordion<T> {
    /// Create an accordion with every entry closed.
    ///
    /// Fails with [`ControllerError::InvalidConfiguration`] when `entries`
    /// is empty.
    pub fn new(entries: Vec<T>) -> Result<Self, ControllerError> {
        if entries.is_empty() {
            return Err(ControllerError::empty("ExclusiveAccordion"));
        }

        Ok(Self {
            entries,
            state: AccordionState::default(),
            history: StateHistory::new(),
        })
    }

    /// Close the entry if it is open, otherwise open it (closing any other).
    ///
    /// Returns whether the entry is open afterwards.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ControllerError> {
        if let Err(err) = check_index(index, self.entries.len()) {
            warn!(index, len = self.entries.len(), "accordion toggle rejected");
            return Err(err);
        }

        let from = self.state;
        let open_index = if from.open_index == Some(index) {
            None
        } else {
            Some(index)
        };
        self.state = AccordionState { open_index };
        self.history = std::mem::take(&mut self.history).record(StateTransition::now(
            from,
            self.state,
            Trigger::Toggle(index),
        ));

        debug!(
            index,
            from = ?from.open_index,
            to = ?open_index,
            "accordion toggled"
        );
        Ok(open_index.is_some())
    }

    /// Whether the entry at `index` is open (pure).
    ///
    /// Indices past the end are never open.
    pub fn is_open(&self, index: usize) -> bool {
        self.state.open_index == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.state.open_index
    }

    pub fn open_entry(&self) -> Option<&T> {
        self.state.open_index.map(|index| &self.entries[index])
    }

    pub fn entry(&self, index: usize) -> Result<&T, ControllerError> {
        check_index(index, self.entries.len())?;
        Ok(&self.entries[index])
    }

    pub fn entry_state(&self, index: usize) -> Result<EntryState, ControllerError> {
        check_index(index, self.entries.len())?;
        Ok(if self.is_open(index) {
            EntryState::Open
        } else {
            EntryState::Closed
        })
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn state(&self) -> &AccordionState {
        &self.state
    }

    pub fn history(&self) -> &StateHistory<AccordionState> {
        &self.history
    }
}
