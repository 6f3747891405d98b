//! The transition table.
//!
//! A pure function over `(BleState, BleEvent)`. The table is total: every
//! pair has an outcome, so the engine never has to reject an event. Pairs
//! without a rule map to themselves with no action.

use super::action::Action;
use super::event::BleEvent;
use super::state::BleState;

/// Evaluate the transition rule for `state` receiving `event`.
///
/// Returns the next state and the action to fire, if any.
///
/// # Example
///
/// ```rust
/// use blefsm::core::{transition, Action, BleEvent, BleState};
///
/// assert_eq!(
///     transition(BleState::Idle, BleEvent::ButtonPressed),
///     (BleState::Advertising, Some(Action::StartAdvertising)),
/// );
/// assert_eq!(
///     transition(BleState::Idle, BleEvent::TimerExpired),
///     (BleState::Idle, None),
/// );
/// ```
pub fn transition(state: BleState, event: BleEvent) -> (BleState, Option<Action>) {
    use Action::*;
    use BleEvent::*;
    use BleState::*;

    match (state, event) {
        (Idle, ButtonPressed) => (Advertising, Some(StartAdvertising)),
        (Idle, ConnectionRequest | TimerExpired) => (Idle, None),

        // Connecting has no side effect of its own
        (Advertising, ConnectionRequest) => (Connected, None),
        (Advertising, TimerExpired) => (Idle, Some(StopAdvertising)),
        (Advertising, ButtonPressed) => (Advertising, None),

        (Connected, ButtonPressed) => (Idle, Some(Disconnect)),
        (Connected, ConnectionRequest | TimerExpired) => (Connected, None),
    }
}

/// Check whether `event` leaves `state` unchanged and fires nothing.
pub fn is_no_op(state: BleState, event: BleEvent) -> bool {
    transition(state, event) == (state, None)
}

/// Get the events that have an effect from a given state.
///
/// Useful for introspection, e.g. deciding which inputs a UI should offer.
pub fn productive_events(state: BleState) -> &'static [BleEvent] {
    use BleEvent::*;
    use BleState::*;

    match state {
        Idle => &[ButtonPressed],
        Advertising => &[ConnectionRequest, TimerExpired],
        Connected => &[ButtonPressed],
    }
}
