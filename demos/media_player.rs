//! Media Player State Machine
//!
//! This example drives a small player through its states and walks the
//! undo/redo history.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Event-driven transitions and direct jumps
//! - Pre-filtering actions with `can_trigger`
//! - Undo, redo, and redo invalidation on forward movement
//!
//! Run with: RUST_LOG=debug cargo run --example media_player

use rewind::{Config, EventId, MachineError, StateMachine};
use tracing_subscriber::EnvFilter;

const PLAYER: &str = r#"{
    "initial": "idle",
    "states": {
        "idle":    { "transitions": { "start": "running" } },
        "running": { "transitions": { "pause": "paused", "stop": "idle" } },
        "paused":  { "transitions": { "resume": "running", "stop": "idle" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Media Player State Machine ===\n");

    let mut machine = StateMachine::new(Config::from_json(PLAYER)?)?;
    println!("Initial state: {}", machine.state());
    println!("Available events: {:?}\n", machine.events());

    for event in ["start", "pause", "resume", "pause"] {
        machine.trigger(event)?;
        println!("{event:>7} -> {}", machine.state());
    }

    for event in ["resume", "stop", "start"] {
        let event = EventId::from(event);
        println!("can {event} while {}: {}", machine.state(), machine.can_trigger(&event));
    }

    match machine.trigger("start") {
        Err(MachineError::InvalidTransition { state, event }) => {
            println!("\n'{event}' is disabled while {state}");
        }
        other => println!("\nunexpected: {other:?}"),
    }

    println!("\nStates that can pause: {:?}", machine.states(Some(&"pause".into())));

    println!("\nWalking back:");
    while machine.undo() {
        println!("   undo -> {}", machine.state());
    }

    machine.redo();
    println!("   redo -> {}", machine.state());

    machine.change_state("paused")?;
    println!("\nJumped to {}; redo available: {}", machine.state(), machine.can_redo());

    machine.reset();
    println!("Reset to {}; undo depth: {}", machine.state(), machine.history().len());

    println!("\nJournal ({} changes):", machine.transitions().len());
    for record in machine.transitions().records() {
        println!("  {} -> {} ({})", record.from, record.to, record.kind);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
