//! Core state machine types and logic.
//!
//! This module contains the pure part of the machine:
//! - States, events and actions
//! - The transition table
//! - Immutable history tracking
//!
//! Nothing in this module performs side effects. Invoking actions and
//! notifying observers happens in [`crate::effects`].

mod action;
mod event;
mod history;
mod state;
mod table;

pub use action::Action;
pub use event::BleEvent;
pub use history::{StateHistory, StateTransition};
pub use state::{BleState, State};
pub use table::{is_no_op, productive_events, transition};
