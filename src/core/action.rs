//! Named side effects fired on transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A side-effecting operation invoked as part of a transition.
///
/// Actions take no arguments and return nothing. The bodies are supplied by
/// the embedder (see [`crate::effects::ActionSet`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    StartAdvertising,
    StopAdvertising,
    Disconnect,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 3] = [
        Self::StartAdvertising,
        Self::StopAdvertising,
        Self::Disconnect,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StartAdvertising => "start_advertising",
            Self::StopAdvertising => "stop_advertising",
            Self::Disconnect => "disconnect",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
