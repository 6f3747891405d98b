//! blefsm: an event-driven lifecycle state machine for a BLE peripheral
//!
//! The machine moves a peripheral between `Idle`, `Advertising` and
//! `Connected` in response to external events, firing injected actions on
//! the way. It is split into a pure core and an effectful shell.
//!
//! # Core Concepts
//!
//! - **Transition table**: a pure, total function `(state, event) -> (state, action)`
//! - **Actions**: callables bound at construction, invoked at most once per event
//! - **Observers**: callables notified with the committed state after every event
//! - **History**: bounded, serializable record of handled events
//!
//! Timing is left to the embedder: a timer expiry is just another event.
//! There is no internal loop, queue or lock.
//!
//! # Example
//!
//! ```rust
//! use blefsm::builder::MachineBuilder;
//! use blefsm::core::{BleEvent, BleState};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let disconnects = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&disconnects);
//!
//! let mut machine = MachineBuilder::new()
//!     .on_disconnect(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .build();
//!
//! machine.handle_event(BleEvent::ButtonPressed);
//! machine.handle_event(BleEvent::ConnectionRequest);
//! assert_eq!(machine.state(), BleState::Connected);
//!
//! machine.handle_event(BleEvent::ButtonPressed);
//! assert_eq!(machine.state(), BleState::Idle);
//! assert_eq!(disconnects.load(Ordering::SeqCst), 1);
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, MachineOptions};
pub use crate::core::{Action, BleEvent, BleState, State, StateHistory, StateTransition};
pub use crate::effects::{BleStateMachine, ObserverId, StepResult};
