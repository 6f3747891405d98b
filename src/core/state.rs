//! Lifecycle states and the `State` trait.
//!
//! States are plain values: inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. History tracking is generic over this trait.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared to detect changes
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: History is serializable
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Discrete mode of the peripheral.
///
/// Exactly one state is current at any time. The machine starts in
/// [`BleState::Idle`] and has no terminal state: every state can be left
/// again by some event.
///
/// # Example
///
/// ```rust
/// use blefsm::core::{BleState, State};
///
/// let state = BleState::default();
/// assert_eq!(state, BleState::Idle);
/// assert_eq!(state.to_string(), "idle");
/// assert!(!state.is_final());
/// assert!(!state.is_error());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BleState {
    /// Radio quiet, waiting for the user.
    #[default]
    Idle,
    /// Broadcasting advertisements, waiting for a central.
    Advertising,
    /// A central is connected.
    Connected,
}

impl BleState {
    /// Every state, in declaration order.
    pub const ALL: [BleState; 3] = [Self::Idle, Self::Advertising, Self::Connected];
}

// The lifecycle is cyclic and failure is not modeled, so the defaults for
// `is_final` and `is_error` hold for every state.
impl State for BleState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Advertising => "advertising",
            Self::Connected => "connected",
        }
    }
}

impl fmt::Display for BleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
