//! Post-transition observers.

use crate::core::BleState;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// Type alias for observer callables.
pub type ObserverFn = Arc<dyn Fn(BleState) + Send + Sync>;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered set of observers notified after every handled event.
///
/// Observers run in registration order. A panicking observer is isolated:
/// the panic is caught and logged, and the remaining observers still run.
#[derive(Clone, Default)]
pub struct Observers {
    entries: Vec<(ObserverId, ObserverFn)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(BleState) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Arc::new(f)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Notify every observer of `state`.
    ///
    /// Returns the number of observers that panicked.
    pub fn notify(&self, state: BleState) -> usize {
        let mut failed = 0;
        for (id, observer) in &self.entries {
            if panic::catch_unwind(AssertUnwindSafe(|| observer(state))).is_err() {
                warn!(observer = ?id, state = %state, "Observer panicked during notification");
                failed += 1;
            }
        }
        failed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
