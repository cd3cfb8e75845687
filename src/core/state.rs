//! Core State trait for controller states.
//!
//! Every controller exposes its state as a plain value implementing this
//! trait, so hosts can inspect, log and record it without touching the
//! controller itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for controller states.
///
/// All methods are pure. States are small immutable values describing where
/// a controller currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: callers compare current states and recorded paths
/// - `Debug`: states appear in log output
/// - `Serialize` + `Deserialize`: hosts may ship state across a UI boundary
///
/// # Example
///
/// ```rust
/// use infodeck::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PanelState {
///     Collapsed,
///     Expanded,
/// }
///
/// impl State for PanelState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Collapsed => "Collapsed",
///             Self::Expanded => "Expanded",
///         }
///     }
/// }
///
/// assert_eq!(PanelState::Expanded.name(), "Expanded");
/// assert!(!PanelState::Expanded.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// UI controllers live for the lifetime of their view and have no
    /// terminal state, so the default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
