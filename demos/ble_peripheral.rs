//! BLE Peripheral Lifecycle
//!
//! Drives the machine through a scripted session: the user presses the
//! button, a central connects, then the user presses the button again to
//! drop the connection.
//!
//! Key concepts:
//! - Actions injected as closures
//! - Level-triggered observer printing the state after every event
//! - External driver loop; the machine never blocks
//!
//! Run with: cargo run --example ble_peripheral

use blefsm::builder::MachineBuilder;
use blefsm::core::BleEvent;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== BLE Peripheral Lifecycle ===\n");

    let mut machine = MachineBuilder::new()
        .on_start_advertising(|| println!("Action: start_advertising()"))
        .on_stop_advertising(|| println!("Action: stop_advertising()"))
        .on_disconnect(|| println!("Action: disconnect()"))
        .observe(|state| println!("Current State: {state}"))
        .build_strict()
        .unwrap();

    println!("Current State: {}", machine.state());

    let script = [
        BleEvent::ButtonPressed,
        BleEvent::ConnectionRequest,
        BleEvent::ButtonPressed,
    ];
    for event in script {
        println!("\n-> {event}");
        machine.handle_event(event);
    }

    println!("\nPath taken:");
    for state in machine.history().get_path() {
        println!("  {state}");
    }

    println!("\n=== Example Complete ===");
}
