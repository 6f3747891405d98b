//! Property-based tests for the lifecycle machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use blefsm::builder::{MachineBuilder, MachineOptions};
use blefsm::core::{transition, Action, BleEvent, BleState};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

prop_compose! {
    fn arbitrary_state()(variant in 0..3usize) -> BleState {
        BleState::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3usize) -> BleEvent {
        BleEvent::ALL[variant]
    }
}

proptest! {
    #[test]
    fn machine_follows_transition_table(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut builder = MachineBuilder::new();
        for action in Action::ALL {
            let calls = Arc::clone(&calls);
            builder = builder.bind(action, move || calls.lock().unwrap().push(action));
        }
        let mut machine = builder.build();

        let mut expected_state = BleState::Idle;
        let mut expected_calls = Vec::new();
        for event in events {
            let (next, action) = transition(expected_state, event);
            expected_calls.extend(action);
            expected_state = next;

            let step = machine.handle_event(event);
            prop_assert_eq!(step.to, next);
            prop_assert_eq!(step.action, action);
            prop_assert_eq!(machine.state(), next);
        }

        prop_assert_eq!(calls.lock().unwrap().clone(), expected_calls);
    }

    #[test]
    fn actions_only_fire_on_state_changes(
        state in arbitrary_state(),
        event in arbitrary_event()
    ) {
        let (next, action) = transition(state, event);
        if action.is_some() {
            prop_assert_ne!(next, state);
        }
    }

    #[test]
    fn notification_count_equals_event_count(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut machine = MachineBuilder::new()
            .observe(move |s| sink.lock().unwrap().push(s))
            .build();

        let steps = machine.handle_events(events.iter().copied());

        let committed: Vec<_> = steps.iter().map(|s| s.to).collect();
        prop_assert_eq!(seen.lock().unwrap().clone(), committed);
        prop_assert_eq!(steps.len(), events.len());
    }

    #[test]
    fn history_records_only_effective_events(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let mut machine = MachineBuilder::new()
            .options(MachineOptions { history_limit: None, ..MachineOptions::default() })
            .build();

        let steps = machine.handle_events(events);
        let effective = steps.iter().filter(|s| !s.is_no_op()).count();

        prop_assert_eq!(machine.history().len(), effective);
        prop_assert!(machine.history().transitions().iter().all(|t| t.changed_state()));
    }

    #[test]
    fn history_never_exceeds_limit(
        limit in 0..8usize,
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let mut machine = MachineBuilder::new()
            .options(MachineOptions { history_limit: Some(limit), ..MachineOptions::default() })
            .build();

        machine.handle_events(events);

        prop_assert!(machine.history().len() <= limit);
    }

    #[test]
    fn advertising_cycles_return_to_idle(cycles in 1..50usize) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let start = Arc::clone(&calls);
        let stop = Arc::clone(&calls);
        let mut machine = MachineBuilder::new()
            .on_start_advertising(move || start.lock().unwrap().push(Action::StartAdvertising))
            .on_stop_advertising(move || stop.lock().unwrap().push(Action::StopAdvertising))
            .build();

        for _ in 0..cycles {
            machine.handle_events([BleEvent::ButtonPressed, BleEvent::TimerExpired]);
        }

        prop_assert_eq!(machine.state(), BleState::Idle);
        let calls = calls.lock().unwrap().clone();
        prop_assert_eq!(calls.len(), 2 * cycles);
        for (i, action) in calls.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Action::StartAdvertising
            } else {
                Action::StopAdvertising
            };
            prop_assert_eq!(*action, expected);
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BleState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
