//! Controller transition history.
//!
//! Every accepted move of a controller is recorded as an immutable
//! [`StateTransition`]. The history is owned by the controller and dropped
//! with it; nothing here is persisted.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The user gesture that caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Carousel advanced to the following step
    Next,
    /// Carousel moved back to the preceding step
    Previous,
    /// Accordion entry at the given index was toggled
    Toggle(usize),
}

/// Record of a single controller transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// What caused it
    pub trigger: Trigger,
}

impl<S: State> StateTransition<S> {
    /// Create a transition stamped with the current time.
    pub fn now(from: S, to: S, trigger: Trigger) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            trigger,
        }
    }
}

/// Ordered history of controller transitions.
///
/// [`record`](Self::record) consumes the history and hands it back with the
/// transition appended; clone first to keep an earlier snapshot.
///
/// # Example
///
/// ```rust
/// use infodeck::core::{State, StateHistory, StateTransition, Trigger};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Slide(usize);
///
/// impl State for Slide {
///     fn name(&self) -> &str {
///         "Slide"
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(Slide(0), Slide(1), Trigger::Next))
///     .record(StateTransition::now(Slide(1), Slide(0), Trigger::Previous));
///
/// let path = history.path();
/// assert_eq!(path, vec![&Slide(0), &Slide(1), &Slide(0)]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    ///
    /// Appends in place, so recording never copies earlier transitions.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first `from` state followed by the `to` state of each
    /// transition. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All transitions in recording order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
