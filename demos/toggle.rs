//! Toggle
//!
//! This example demonstrates the fire protocol on a two-state toggle.
//!
//! Key concepts:
//! - A state machine as an enum of unit variants plus one `State` impl
//! - All four transition kinds: external, internal, ignore and deny
//! - The context threaded through the exit/entry/do hook pipeline
//! - Typed failures that name the denied state/event pair
//!
//! Run with: cargo run --example toggle

use serde::{Deserialize, Serialize};
use shunt::core::{HookResult, State, Transition};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Toggle {
    Off,
    On,
}

#[derive(Clone, Debug, PartialEq)]
enum ToggleEvent {
    TurnOn,
    TurnOff,
    Ignore,
    Internal,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToggleContext {
    is_on: bool,
    count: u32,
}

impl State for Toggle {
    type Event = ToggleEvent;
    type Context = ToggleContext;

    fn name(&self) -> &str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }

    fn transition(&self, event: &ToggleEvent) -> Transition<Self> {
        match (self, event) {
            (Self::Off, ToggleEvent::TurnOn) => Transition::External(Self::On),
            (Self::Off, ToggleEvent::TurnOff) => Transition::Deny,
            (Self::On, ToggleEvent::TurnOn) => Transition::Deny,
            (Self::On, ToggleEvent::TurnOff) => Transition::External(Self::Off),
            (_, ToggleEvent::Ignore) => Transition::Ignore,
            (_, ToggleEvent::Internal) => Transition::Internal,
        }
    }

    fn on_entry(&self, _event: &ToggleEvent, mut ctx: ToggleContext) -> HookResult<ToggleContext> {
        ctx.is_on = matches!(self, Self::On);
        ctx.count = 0;
        Ok(ctx)
    }

    fn on_do(&self, _event: &ToggleEvent, mut ctx: ToggleContext) -> HookResult<ToggleContext> {
        ctx.count += 1;
        Ok(ctx)
    }

    fn on_exit(&self, _event: &ToggleEvent, ctx: ToggleContext) -> HookResult<ToggleContext> {
        Ok(ctx)
    }
}

fn main() {
    println!("=== Toggle Example ===\n");

    let state = Toggle::Off;
    let ctx = ToggleContext::default();
    println!("Starting in {} with {ctx:?}", state.name());

    // External transition: Off -> On
    let (state, result) = state.fire(&ToggleEvent::TurnOn, ctx);
    let ctx = result.expect("TurnOn is allowed from Off");
    println!("TurnOn   -> {} with {ctx:?}", state.name());

    // Internal transition: the do hook runs in place
    let (state, result) = state.fire(&ToggleEvent::Internal, ctx);
    let ctx = result.expect("Internal is always handled");
    println!("Internal -> {} with {ctx:?}", state.name());

    // Ignored event: nothing happens
    let (state, result) = state.fire(&ToggleEvent::Ignore, ctx);
    let ctx = result.expect("Ignore passes the context through");
    println!("Ignore   -> {} with {ctx:?}", state.name());

    // Denied event: a typed failure, the machine stays usable
    let (state, result) = state.fire(&ToggleEvent::TurnOn, ctx.clone());
    match result {
        Ok(_) => unreachable!("TurnOn is denied while On"),
        Err(err) => println!("TurnOn   -> refused: {err}"),
    }

    // External transition back: On -> Off
    let (state, result) = state.fire(&ToggleEvent::TurnOff, ctx);
    let ctx = result.expect("TurnOff is allowed from On");
    println!("TurnOff  -> {} with {ctx:?}", state.name());

    println!("\n=== Example Complete ===");
}
