//! Step carousel with cyclic navigation.

use crate::controller::{check_index, ControllerError};
use crate::core::{State, StateHistory, StateTransition, Step, Trigger};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Position of a carousel within its steps.
///
/// Invariant: `index() < len` of the owning carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    current_index: usize,
}

impl CarouselState {
    pub fn index(&self) -> usize {
        self.current_index
    }
}

impl State for CarouselState {
    fn name(&self) -> &str {
        "Showing"
    }
}

/// Shows exactly one item of a fixed, non-empty sequence at a time.
///
/// `next` and `previous` wrap around, so the carousel never runs off either
/// end and has no terminal position.
///
/// # Example
///
/// ```rust
/// use infodeck::controller::StepCarousel;
/// use infodeck::core::Step;
///
/// let mut carousel = StepCarousel::new(vec![
///     Step::new("Organize your data", "Rows and columns", ""),
///     Step::new("Export to CSV", "Save as CSV or XLSX", ""),
///     Step::new("Ask an AI", "Upload with a clear prompt", ""),
/// ])
/// .unwrap();
///
/// assert_eq!(carousel.current().title, "Organize your data");
/// carousel.previous();
/// assert_eq!(carousel.current_index(), 2);
/// carousel.next();
/// assert_eq!(carousel.current_index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct StepCarousel<T = Step> {
    steps: Vec<T>,
    state: CarouselState,
    history: StateHistory<CarouselState>,
}

impl<T> StepCarousel<T> {
    /// Create a carousel positioned on the first item.
    ///
    /// Fails with [`ControllerError::InvalidConfiguration`] when `steps` is
    /// empty.
    pub fn new(steps: Vec<T>) -> Result<Self, ControllerError> {
        if steps.is_empty() {
            return Err(ControllerError::empty("StepCarousel"));
        }

        Ok(Self {
            steps,
            state: CarouselState { current_index: 0 },
            history: StateHistory::new(),
        })
    }

    /// Advance one item, wrapping from the last item to the first.
    /// Returns the new index.
    pub fn next(&mut self) -> usize {
        let next = (self.state.current_index + 1) % self.steps.len();
        self.move_to(next, Trigger::Next)
    }

    /// Go back one item, wrapping from the first item to the last.
    /// Returns the new index.
    pub fn previous(&mut self) -> usize {
        let len = self.steps.len();
        let previous = (self.state.current_index + len - 1) % len;
        self.move_to(previous, Trigger::Previous)
    }

    /// Item currently displayed (pure).
    pub fn current(&self) -> &T {
        &self.steps[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    /// Item at `index`, without moving the carousel.
    pub fn get(&self, index: usize) -> Result<&T, ControllerError> {
        check_index(index, self.steps.len())?;
        Ok(&self.steps[index])
    }

    /// One `(index, active)` pair per item, for progress indicators.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        let current = self.state.current_index;
        (0..self.steps.len()).map(move |index| (index, index == current))
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn history(&self) -> &StateHistory<CarouselState> {
        &self.history
    }

    fn move_to(&mut self, index: usize, trigger: Trigger) -> usize {
        let from = self.state;
        self.state = CarouselState {
            current_index: index,
        };
        let transition = StateTransition::now(from, self.state, trigger);
        self.history = std::mem::take(&mut self.history).record(transition);

        debug!(
            from = from.current_index,
            to = index,
            ?trigger,
            "carousel moved"
        );
        index
    }
}
