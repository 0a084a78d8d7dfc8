//! Transition kinds: how a state handles an event.
//!
//! A state's `transition` method classifies every event into exactly one of
//! these four kinds. The classification is pure - it decides what `fire`
//! will do but performs no side effects itself.

/// How an event is handled from a given state.
///
/// Returned by [`State::transition`](crate::core::State::transition) and
/// matched exhaustively by [`fire`](crate::core::State::fire). The match is
/// deliberately wildcard-free so that adding a kind is a compile error at
/// every dispatch site.
///
/// # Example
///
/// ```rust
/// use shunt::core::Transition;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// let t = Transition::External(Door::Open);
/// assert_eq!(t, Transition::External(Door::Open));
/// assert_ne!(t, Transition::Ignore);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Transition<S> {
    /// Leave the current state and enter the target state.
    ///
    /// Runs the source's exit hook, then the target's entry and do hooks.
    External(S),

    /// Stay in the current state but run its do hook.
    Internal,

    /// The event has no effect. No hooks run.
    Ignore,

    /// The event is refused. Surfaced as a failure, no hooks run.
    Deny,
}

impl<S> Transition<S> {
    /// The target state of an external transition, if any.
    pub fn target(&self) -> Option<&S> {
        match self {
            Self::External(target) => Some(target),
            Self::Internal | Self::Ignore | Self::Deny => None,
        }
    }
}
