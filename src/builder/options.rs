//! Serializable machine options.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Default number of history records retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Tunable behavior of a machine.
///
/// Callables are not part of the options; bind them through
/// [`MachineBuilder`](crate::builder::MachineBuilder). Missing fields take
/// their default values when deserializing.
///
/// # Example
///
/// ```rust
/// use blefsm::builder::MachineOptions;
///
/// let options = MachineOptions::from_json(r#"{ "history_limit": null }"#).unwrap();
/// assert_eq!(options.history_limit, None);
/// assert!(options.log_ignored_events);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Emit a debug diagnostic when an event has no effect
    pub log_ignored_events: bool,
    /// Maximum history records retained; `None` is unbounded
    pub history_limit: Option<usize>,
    /// Also record events that had no effect in history
    pub record_ignored_events: bool,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            log_ignored_events: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            record_ignored_events: false,
        }
    }
}

impl MachineOptions {
    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidOptions(e.to_string()))
    }
}
