//! Builder API for configuring machines.
//!
//! Actions and observers are callables supplied at construction time;
//! everything serializable lives in [`MachineOptions`].

pub mod error;
pub mod machine;
pub mod options;

pub use error::{BuildError, ConfigIssue};
pub use machine::MachineBuilder;
pub use options::{MachineOptions, DEFAULT_HISTORY_LIMIT};
