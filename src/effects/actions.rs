//! Injected action bodies.

use crate::core::Action;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Type alias for action callables.
pub type ActionFn = Arc<dyn Fn() + Send + Sync>;

/// The callables bound to each [`Action`].
///
/// Unbound actions are no-ops: invoking one emits a warning and returns,
/// so the transition that asked for it still commits.
#[derive(Clone, Default)]
pub struct ActionSet {
    start_advertising: Option<ActionFn>,
    stop_advertising: Option<ActionFn>,
    disconnect: Option<ActionFn>,
}

impl ActionSet {
    /// Create an action set with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a callable to `action`, replacing any previous binding.
    pub fn bind<F>(&mut self, action: Action, f: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.slot_mut(action) = Some(Arc::new(f));
    }

    /// Remove the binding for `action`.
    pub fn unbind(&mut self, action: Action) {
        *self.slot_mut(action) = None;
    }

    pub fn is_bound(&self, action: Action) -> bool {
        self.slot(action).is_some()
    }

    /// Get the actions that have no binding.
    pub fn unbound(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|a| !self.is_bound(*a))
            .collect()
    }

    /// Run the callable bound to `action`.
    ///
    /// Returns `false` if nothing was bound.
    pub fn invoke(&self, action: Action) -> bool {
        match self.slot(action) {
            Some(f) => {
                trace!(action = %action, "Invoking action");
                f();
                true
            }
            None => {
                warn!(action = %action, "No binding for action, skipping");
                false
            }
        }
    }

    fn slot(&self, action: Action) -> &Option<ActionFn> {
        match action {
            Action::StartAdvertising => &self.start_advertising,
            Action::StopAdvertising => &self.stop_advertising,
            Action::Disconnect => &self.disconnect,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Option<ActionFn> {
        match action {
            Action::StartAdvertising => &mut self.start_advertising,
            Action::StopAdvertising => &mut self.stop_advertising,
            Action::Disconnect => &mut self.disconnect,
        }
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSet")
            .field("start_advertising", &self.start_advertising.is_some())
            .field("stop_advertising", &self.stop_advertising.is_some())
            .field("disconnect", &self.disconnect.is_some())
            .finish()
    }
}
