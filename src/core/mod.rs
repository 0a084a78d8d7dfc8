//! Core state machine types and logic.
//!
//! This module contains the whole engine:
//! - State definitions and dispatch via the `State` trait
//! - Transition kinds via the `Transition` enum
//! - The failure taxonomy via `TransitionError`
//!
//! The engine is a synchronous, embeddable dispatch primitive: it performs
//! no I/O, spawns nothing, and retains nothing between `fire` calls.

mod error;
mod state;
mod transition;

pub use error::{HookError, HookResult, TransitionError};
pub use state::State;
pub use transition::Transition;
