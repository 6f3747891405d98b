//! External stimuli delivered to the machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An instantaneous, payload-free event.
///
/// Events are not queued by the machine; the caller delivers them one at a
/// time. Timer expiry is an event like any other: the machine never
/// generates it on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BleEvent {
    /// The user pressed the pairing button.
    ButtonPressed,
    /// A central asked to connect.
    ConnectionRequest,
    /// The advertising timer ran out.
    TimerExpired,
}

impl BleEvent {
    /// Every event, in declaration order.
    pub const ALL: [BleEvent; 3] = [
        Self::ButtonPressed,
        Self::ConnectionRequest,
        Self::TimerExpired,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ButtonPressed => "button_pressed",
            Self::ConnectionRequest => "connection_request",
            Self::TimerExpired => "timer_expired",
        }
    }
}

impl fmt::Display for BleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_snake_case() {
        assert_eq!(BleEvent::ButtonPressed.to_string(), "button_pressed");
        assert_eq!(BleEvent::ConnectionRequest.to_string(), "connection_request");
        assert_eq!(BleEvent::TimerExpired.to_string(), "timer_expired");
    }

    #[test]
    fn all_lists_each_event_once() {
        let mut seen = std::collections::HashSet::new();
        for event in BleEvent::ALL {
            assert!(seen.insert(event));
        }
        assert_eq!(seen.len(), 3);
    }
}
