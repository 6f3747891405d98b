//! State machine that dispatches events and runs their side effects.

use crate::builder::MachineOptions;
use crate::core::{transition, Action, BleEvent, BleState, StateHistory, StateTransition};
use crate::effects::actions::ActionSet;
use crate::effects::observer::{ObserverId, Observers};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of handling a single event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub from: BleState,
    pub event: BleEvent,
    pub to: BleState,
    pub action: Option<Action>,
}

impl StepResult {
    /// Check if the state value changed.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Check if the event had no effect at all.
    pub fn is_no_op(&self) -> bool {
        !self.changed() && self.action.is_none()
    }
}

/// BLE peripheral lifecycle machine.
///
/// Owns the current state, the bound actions and the observers. Events are
/// handled one at a time and run to completion; `handle_event` takes
/// `&mut self`, so concurrent callers must serialize access themselves
/// (for example behind a mutex).
///
/// # Example
///
/// ```rust
/// use blefsm::core::{Action, BleEvent, BleState};
/// use blefsm::effects::BleStateMachine;
///
/// let mut machine = BleStateMachine::new();
/// let step = machine.handle_event(BleEvent::ButtonPressed);
///
/// assert_eq!(step.to, BleState::Advertising);
/// assert_eq!(step.action, Some(Action::StartAdvertising));
/// assert_eq!(machine.state(), BleState::Advertising);
/// ```
#[derive(Debug)]
pub struct BleStateMachine {
    current: BleState,
    actions: ActionSet,
    observers: Observers,
    history: StateHistory,
    options: MachineOptions,
}

impl BleStateMachine {
    /// Create a machine in `Idle` with no actions bound, no observers and
    /// default options.
    pub fn new() -> Self {
        Self::from_parts(ActionSet::new(), Observers::new(), MachineOptions::default())
    }

    pub(crate) fn from_parts(
        actions: ActionSet,
        observers: Observers,
        options: MachineOptions,
    ) -> Self {
        Self {
            current: BleState::Idle,
            actions,
            observers,
            history: StateHistory::with_limit(options.history_limit),
            options,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> BleState {
        self.current
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Handle one event.
    ///
    /// Evaluates the transition table, invokes the action it names (if
    /// any), commits the next state, then notifies every observer with the
    /// committed state. Observers are notified even when nothing changed.
    pub fn handle_event(&mut self, event: BleEvent) -> StepResult {
        let from = self.current;
        let (to, action) = transition(from, event);
        let step = StepResult {
            from,
            event,
            to,
            action,
        };

        if let Some(action) = action {
            self.actions.invoke(action);
        }
        self.current = to;

        debug!(from = %from, event = %event, to = %to, action = ?action, "Handled event");
        if step.changed() {
            info!(from = %from, to = %to, event = %event, action = ?action, "BLE state changed");
        } else if step.is_no_op() && self.options.log_ignored_events {
            debug!(state = %from, event = %event, "Event has no effect in this state");
        }

        if !step.is_no_op() || self.options.record_ignored_events {
            self.history.push(StateTransition {
                from,
                to,
                event,
                action,
                timestamp: Utc::now(),
            });
        }

        self.observers.notify(to);
        step
    }

    /// Handle a sequence of events in order, returning every step.
    pub fn handle_events<I>(&mut self, events: I) -> Vec<StepResult>
    where
        I: IntoIterator<Item = BleEvent>,
    {
        events.into_iter().map(|e| self.handle_event(e)).collect()
    }

    /// Force the machine back to `Idle`.
    ///
    /// Fires no action and records no history; observers are notified once.
    pub fn reset(&mut self) {
        if self.current != BleState::Idle {
            info!(from = %self.current, "BLE state reset");
        }
        self.current = BleState::Idle;
        self.observers.notify(self.current);
    }

    /// Register an observer, notified after every handled event.
    pub fn subscribe<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(BleState) + Send + Sync + 'static,
    {
        self.observers.subscribe(f)
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Default for BleStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
