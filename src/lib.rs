//! Shunt: a railway-oriented finite state machine engine.
//!
//! Shunt is a minimal, embeddable dispatch primitive: given a current state,
//! an event and a context, it decides how to transition and threads a
//! result-carrying pipeline through the exit, entry and do lifecycle hooks,
//! producing either a new (state, context) pair or a typed failure that
//! identifies exactly which hook, in which transition kind, on which
//! state/event pair, failed.
//!
//! # Core Concepts
//!
//! - **State**: stateless singleton states via the [`State`] trait
//! - **Transition**: a closed classification of how an event is handled -
//!   external, internal, ignored or denied
//! - **Fire**: the one dispatching operation, [`State::fire`], running hooks
//!   strictly in exit -> entry -> do order and short-circuiting on the first
//!   failure
//! - **Errors**: every failure is a [`TransitionError`] that names the
//!   failing phase and preserves the hook's own error as its source
//!
//! The hosting application owns the state, event and context types as well
//! as any storage or persistence; the engine holds nothing between calls and
//! is safe to share across threads as long as each call owns its context.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shunt::core::{HookResult, State, Transition};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum Lamp {
//!     Off,
//!     On,
//! }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum LampEvent {
//!     Switch,
//!     Wave,
//! }
//!
//! impl State for Lamp {
//!     type Event = LampEvent;
//!     type Context = u32; // switch count
//!
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Off => "Off",
//!             Self::On => "On",
//!         }
//!     }
//!
//!     fn transition(&self, event: &LampEvent) -> Transition<Self> {
//!         match event {
//!             LampEvent::Switch => Transition::External(match self {
//!                 Self::Off => Self::On,
//!                 Self::On => Self::Off,
//!             }),
//!             LampEvent::Wave => Transition::Ignore,
//!         }
//!     }
//!
//!     fn on_entry(&self, _event: &LampEvent, count: u32) -> HookResult<u32> {
//!         Ok(count + 1)
//!     }
//!
//!     fn on_do(&self, _event: &LampEvent, count: u32) -> HookResult<u32> {
//!         Ok(count)
//!     }
//!
//!     fn on_exit(&self, _event: &LampEvent, count: u32) -> HookResult<u32> {
//!         Ok(count)
//!     }
//! }
//!
//! let (state, result) = Lamp::Off.fire(&LampEvent::Switch, 0);
//! assert_eq!(state, Lamp::On);
//! assert_eq!(result.unwrap(), 1);
//!
//! let (state, result) = state.fire(&LampEvent::Wave, 1);
//! assert_eq!(state, Lamp::On);
//! assert_eq!(result.unwrap(), 1);
//! ```

pub mod core;

// Re-export commonly used types
pub use crate::core::{HookError, HookResult, State, Transition, TransitionError};
