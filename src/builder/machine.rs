//! Builder for constructing machines.

use crate::builder::error::{BuildError, ConfigIssue};
use crate::builder::options::MachineOptions;
use crate::core::{Action, BleState};
use crate::effects::{ActionSet, BleStateMachine, Observers};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use blefsm::builder::MachineBuilder;
/// use blefsm::core::{BleEvent, BleState};
///
/// let mut machine = MachineBuilder::new()
///     .on_start_advertising(|| println!("Action: start_advertising()"))
///     .on_stop_advertising(|| println!("Action: stop_advertising()"))
///     .on_disconnect(|| println!("Action: disconnect()"))
///     .observe(|state| println!("Current State: {state}"))
///     .build_strict()
///     .unwrap();
///
/// machine.handle_event(BleEvent::ButtonPressed);
/// assert_eq!(machine.state(), BleState::Advertising);
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    actions: ActionSet,
    observers: Observers,
    options: MachineOptions,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the callable run when advertising starts.
    pub fn on_start_advertising<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind(Action::StartAdvertising, f)
    }

    /// Bind the callable run when advertising stops.
    pub fn on_stop_advertising<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind(Action::StopAdvertising, f)
    }

    /// Bind the callable run when the central is disconnected.
    pub fn on_disconnect<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind(Action::Disconnect, f)
    }

    /// Bind a callable to any action.
    pub fn bind<F>(mut self, action: Action, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.actions.bind(action, f);
        self
    }

    /// Add an observer (optional, repeatable).
    pub fn observe<F>(mut self, f: F) -> Self
    where
        F: Fn(BleState) + Send + Sync + 'static,
    {
        self.observers.subscribe(f);
        self
    }

    /// Replace the options.
    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the configuration, accumulating every issue.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Action::ALL
            .into_iter()
            .map(|action| {
                if self.actions.is_bound(action) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigIssue::UnboundAction(action))
                }
            })
            .collect();

        if self.options.history_limit == Some(0) && self.options.record_ignored_events {
            checks.push(Validation::fail(ConfigIssue::EmptyHistoryWindow));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine. Unbound actions become no-ops.
    pub fn build(self) -> BleStateMachine {
        BleStateMachine::from_parts(self.actions, self.observers, self.options)
    }

    /// Build the machine, failing if [`validate`](Self::validate) reports
    /// any issue.
    pub fn build_strict(self) -> Result<BleStateMachine, BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(self.build()),
            Validation::Failure(issues) => Err(BuildError::Misconfigured(
                issues.iter().cloned().collect(),
            )),
        }
    }
}
