//! The State capability and the fire protocol.
//!
//! Concrete states implement [`State`]; the transition decision and the
//! three lifecycle hooks are the whole contract. Dispatch ([`State::fire`])
//! and the four inspection predicates are provided once as default methods,
//! so a state machine is just an enum of unit variants plus one impl block.

use super::error::{HookResult, TransitionError};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A state of a finite state machine.
///
/// States are value-less, immutable singletons: variants of an enum,
/// distinguished by identity (`PartialEq`), never by mutable fields. The
/// transition decision and the hooks must be pure functions of the event and
/// context only.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are cheap values compared by identity
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: so a hosting application can persist the
///   current state (the engine itself persists nothing)
///
/// # Lifecycle hooks
///
/// `on_exit`, `on_entry` and `on_do` are the only places side effects on the
/// context may occur. Each takes the context by value and returns a new one
/// on the success track, or any domain error on the failure track;
/// [`fire`](Self::fire) wraps that error with the failing phase, state and
/// event. Hooks signal failure by returning `Err` - they must not panic.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use shunt::core::{HookResult, State, Transition};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum DoorEvent {
///     Open,
///     Close,
///     Knock,
/// }
///
/// impl State for Door {
///     type Event = DoorEvent;
///     type Context = u32; // times the door moved
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn transition(&self, event: &DoorEvent) -> Transition<Self> {
///         match (self, event) {
///             (Self::Closed, DoorEvent::Open) => Transition::External(Self::Open),
///             (Self::Open, DoorEvent::Close) => Transition::External(Self::Closed),
///             (_, DoorEvent::Knock) => Transition::Ignore,
///             _ => Transition::Deny,
///         }
///     }
///
///     fn on_entry(&self, _event: &DoorEvent, moves: u32) -> HookResult<u32> {
///         Ok(moves + 1)
///     }
///
///     fn on_do(&self, _event: &DoorEvent, moves: u32) -> HookResult<u32> {
///         Ok(moves)
///     }
///
///     fn on_exit(&self, _event: &DoorEvent, moves: u32) -> HookResult<u32> {
///         Ok(moves)
///     }
/// }
///
/// let (state, result) = Door::Closed.fire(&DoorEvent::Open, 0);
/// assert_eq!(state, Door::Open);
/// assert_eq!(result.unwrap(), 1);
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The application's event type. Only equality and a `Debug` rendering
    /// (for diagnostics) are required of it.
    type Event: Debug;

    /// The application's context payload. The engine never inspects it;
    /// hooks own it for the duration of each call.
    type Context;

    /// Get the state's name for display and error diagnostics.
    fn name(&self) -> &str;

    /// Classify an event fired while this state is active.
    ///
    /// Must be pure and total: every event maps to exactly one
    /// [`Transition`] kind, and repeated calls with the same event yield an
    /// equal kind.
    fn transition(&self, event: &Self::Event) -> Transition<Self>;

    /// Runs once when this state is entered via an external transition.
    ///
    /// Never invoked on internal transitions, ignores or denials, and never
    /// while this state is already active.
    fn on_entry(&self, event: &Self::Event, ctx: Self::Context) -> HookResult<Self::Context>;

    /// Runs once after entry on an external transition, and as the sole
    /// action of an internal transition.
    fn on_do(&self, event: &Self::Event, ctx: Self::Context) -> HookResult<Self::Context>;

    /// Runs once when this state is left via an external transition, before
    /// the target state's entry hook.
    fn on_exit(&self, event: &Self::Event, ctx: Self::Context) -> HookResult<Self::Context>;

    /// Check if the event would be refused from this state.
    fn is_deny(&self, event: &Self::Event) -> bool {
        matches!(self.transition(event), Transition::Deny)
    }

    /// Check if the event would trigger an external transition.
    fn is_external(&self, event: &Self::Event) -> bool {
        matches!(self.transition(event), Transition::External(_))
    }

    /// Check if the event would trigger an internal transition.
    fn is_internal(&self, event: &Self::Event) -> bool {
        matches!(self.transition(event), Transition::Internal)
    }

    /// Check if the event would be ignored.
    fn is_ignore(&self, event: &Self::Event) -> bool {
        matches!(self.transition(event), Transition::Ignore)
    }

    /// Fire an event: dispatch on the transition kind, run the lifecycle
    /// hooks in order, and return the resulting state with the context on
    /// the success track or a [`TransitionError`] on the failure track.
    ///
    /// Per kind:
    ///
    /// - `Deny`: no hooks run; `(self, Err(Denied))`.
    /// - `Ignore`: no hooks run; `(self, Ok(ctx))` with the context passed
    ///   through untouched.
    /// - `Internal`: exactly one `on_do` on this state; the resulting state
    ///   is this state on both success and failure.
    /// - `External(target)`: `on_exit` on this state, then `on_entry` and
    ///   `on_do` on the target, short-circuiting on the first failure.
    ///
    /// The resulting state is never absent, so the caller can keep operating
    /// the machine after an error. On an external transition the active
    /// state becomes the target as soon as `on_exit` has succeeded: an
    /// `on_entry` or `on_do` failure is reported against the *target* state,
    /// and the returned state is the target even though its lifecycle did
    /// not complete. Callers must treat the returned state as authoritative
    /// and decide for themselves whether such a machine needs a recovery
    /// transition.
    ///
    /// Nothing is retried; a failing hook is terminal for this call. On the
    /// failure track the context is dropped - callers that need to resume
    /// from the prior context keep their own copy before firing.
    fn fire(
        &self,
        event: &Self::Event,
        ctx: Self::Context,
    ) -> (Self, Result<Self::Context, TransitionError>) {
        match self.transition(event) {
            Transition::Deny => {
                let err = TransitionError::Denied {
                    state: self.name().to_string(),
                    event: format!("{event:?}"),
                };
                (self.clone(), Err(err))
            }

            Transition::Ignore => (self.clone(), Ok(ctx)),

            Transition::Internal => match self.on_do(event, ctx) {
                Ok(ctx) => (self.clone(), Ok(ctx)),
                Err(cause) => {
                    let err = TransitionError::InternalDo {
                        state: self.name().to_string(),
                        event: format!("{event:?}"),
                        cause,
                    };
                    (self.clone(), Err(err))
                }
            },

            Transition::External(target) => {
                let ctx = match self.on_exit(event, ctx) {
                    Ok(ctx) => ctx,
                    Err(cause) => {
                        // Exit failed: the transition never completed
                        // structurally, so the machine stays in the source.
                        let err = TransitionError::Exit {
                            state: self.name().to_string(),
                            event: format!("{event:?}"),
                            cause,
                        };
                        return (self.clone(), Err(err));
                    }
                };

                // The state pointer moves once exit has succeeded.
                let ctx = match target.on_entry(event, ctx) {
                    Ok(ctx) => ctx,
                    Err(cause) => {
                        let err = TransitionError::Entry {
                            state: target.name().to_string(),
                            event: format!("{event:?}"),
                            cause,
                        };
                        return (target, Err(err));
                    }
                };

                match target.on_do(event, ctx) {
                    Ok(ctx) => (target, Ok(ctx)),
                    Err(cause) => {
                        let err = TransitionError::Do {
                            state: target.name().to_string(),
                            event: format!("{event:?}"),
                            cause,
                        };
                        (target, Err(err))
                    }
                }
            }
        }
    }
}
