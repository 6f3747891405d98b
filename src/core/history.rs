//! Transition history tracking.
//!
//! `record` is the value API: it returns a new history and leaves the
//! original untouched. The machine owns its history and appends in place
//! with `push`.

use super::action::Action;
use super::event::BleEvent;
use super::state::{BleState, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handled event.
///
/// # Example
///
/// ```rust
/// use blefsm::core::{Action, BleEvent, BleState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: BleState::Idle,
///     to: BleState::Advertising,
///     event: BleEvent::ButtonPressed,
///     action: Some(Action::StartAdvertising),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State = BleState> {
    /// The state the event was delivered in
    pub from: S,
    /// The state after the event was handled
    pub to: S,
    /// The event that triggered the transition
    pub event: BleEvent,
    /// The action fired, if any
    pub action: Option<Action>,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of transitions, optionally bounded.
///
/// When a limit is set, recording past the limit drops the oldest entries.
///
/// # Example
///
/// ```rust
/// use blefsm::core::{Action, BleEvent, BleState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: BleState::Idle,
///         to: BleState::Advertising,
///         event: BleEvent::ButtonPressed,
///         action: Some(Action::StartAdvertising),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: BleState::Advertising,
///         to: BleState::Connected,
///         event: BleEvent::ConnectionRequest,
///         action: None,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(
///     history.get_path(),
///     vec![BleState::Idle, BleState::Advertising, BleState::Connected]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State = BleState> {
    transitions: Vec<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create a new empty history retaining at most `limit` records.
    ///
    /// `None` means unbounded.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, dropping the oldest records past the
    /// limit.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);

        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` state of the oldest retained record,
    /// followed by the `to` state of every record.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.clone());
        }
        path.extend(self.transitions.iter().map(|t| t.to.clone()));
        path
    }

    /// Calculate total duration from first to last retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all retained records, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Get the most recent record.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Count records that fired `action`.
    pub fn count_action(&self, action: Action) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.action == Some(action))
            .count()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(
        from: BleState,
        to: BleState,
        event: BleEvent,
        action: Option<Action>,
        timestamp: DateTime<Utc>,
    ) -> StateTransition {
        StateTransition {
            from,
            to,
            event,
            action,
            timestamp,
        }
    }

    fn advertise() -> StateTransition {
        record_at(
            BleState::Idle,
            BleState::Advertising,
            BleEvent::ButtonPressed,
            Some(Action::StartAdvertising),
            Utc::now(),
        )
    }

    fn time_out() -> StateTransition {
        record_at(
            BleState::Advertising,
            BleState::Idle,
            BleEvent::TimerExpired,
            Some(Action::StopAdvertising),
            Utc::now(),
        )
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(advertise());

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new().record(advertise()).record(time_out());

        assert_eq!(
            history.get_path(),
            vec![BleState::Idle, BleState::Advertising, BleState::Idle]
        );
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = StateHistory::with_limit(Some(2));
        history = history.record(advertise());
        history = history.record(time_out());
        history = history.record(advertise());

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].event, BleEvent::TimerExpired);
        assert_eq!(history.transitions()[1].event, BleEvent::ButtonPressed);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::with_limit(Some(2));
        history.push(advertise());
        history.push(time_out());
        history.push(advertise());

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![BleState::Advertising, BleState::Idle, BleState::Advertising]
        );
    }

    #[test]
    fn push_and_record_agree() {
        let mut pushed = StateHistory::with_limit(Some(3));
        let mut recorded = StateHistory::with_limit(Some(3));
        for transition in [advertise(), time_out(), advertise(), time_out()] {
            pushed.push(transition.clone());
            recorded = recorded.record(transition);
        }

        assert_eq!(pushed, recorded);
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Beacon {
        Off,
        On,
    }

    impl State for Beacon {
        fn name(&self) -> &str {
            match self {
                Self::Off => "off",
                Self::On => "on",
            }
        }
    }

    #[test]
    fn history_is_generic_over_state() {
        let history = StateHistory::new().record(StateTransition {
            from: Beacon::Off,
            to: Beacon::On,
            event: BleEvent::ButtonPressed,
            action: Some(Action::StartAdvertising),
            timestamp: Utc::now(),
        });

        assert_eq!(history.get_path(), vec![Beacon::Off, Beacon::On]);
        assert!(history.transitions()[0].changed_state());
        assert_eq!(history.last().map(|t| t.to.name()), Some("on"));
    }

    #[test]
    fn zero_limit_retains_nothing() {
        let history = StateHistory::with_limit(Some(0)).record(advertise());
        assert!(history.is_empty());
    }

    #[test]
    fn count_action_tallies_matching_records() {
        let history = StateHistory::new()
            .record(advertise())
            .record(time_out())
            .record(advertise());

        assert_eq!(history.count_action(Action::StartAdvertising), 2);
        assert_eq!(history.count_action(Action::StopAdvertising), 1);
        assert_eq!(history.count_action(Action::Disconnect), 0);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let later = start + chrono::Duration::milliseconds(250);

        let history = StateHistory::new()
            .record(record_at(
                BleState::Idle,
                BleState::Advertising,
                BleEvent::ButtonPressed,
                Some(Action::StartAdvertising),
                start,
            ))
            .record(record_at(
                BleState::Advertising,
                BleState::Connected,
                BleEvent::ConnectionRequest,
                None,
                later,
            ));

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(advertise());
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::with_limit(Some(8))
            .record(advertise())
            .record(time_out());

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
