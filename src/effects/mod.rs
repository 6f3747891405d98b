//! Side-effecting shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Actions**: callables injected per [`Action`](crate::core::Action)
//! - **Observers**: callables notified with the committed state after every event
//! - **State Machine**: owns the current state and dispatches events

mod actions;
mod machine;
mod observer;

pub use actions::{ActionFn, ActionSet};
pub use machine::{BleStateMachine, StepResult};
pub use observer::{ObserverFn, ObserverId, Observers};
