//! Transition error taxonomy.
//!
//! Every failure leaving [`fire`](crate::core::State::fire) is one of these
//! variants. Hook-originated failures keep the hook's own error as a wrapped
//! cause, reachable through `std::error::Error::source` and downcastable to
//! its concrete type - the engine never swallows a domain error.

use thiserror::Error;

/// Error type hooks fail with.
///
/// Hooks may signal any domain error; the engine only requires that it be a
/// boxed `std::error::Error` so the cause stays inspectable after wrapping.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Railway-oriented result threaded through the lifecycle hooks.
///
/// Success carries the (possibly replaced) context, failure carries the
/// hook's domain error.
pub type HookResult<C> = Result<C, HookError>;

/// Errors that can occur when firing an event.
///
/// Each variant records which state and event were involved, rendered into
/// the diagnostic as `State=<name>, Event=<event>`. All variants except
/// [`Denied`](Self::Denied) wrap the failing hook's error as their source.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The state's transition decision refused the event. No hooks ran.
    #[error("Transition denied: State={state}, Event={event}")]
    Denied { state: String, event: String },

    /// The source state's exit hook failed during an external transition.
    /// The machine is still in the source state.
    #[error("onExit External Transition error: State={state}, Event={event}")]
    Exit {
        state: String,
        event: String,
        #[source]
        cause: HookError,
    },

    /// The target state's entry hook failed during an external transition.
    /// The machine is already in the target state (exit had succeeded).
    #[error("onEntry External Transition error: State={state}, Event={event}")]
    Entry {
        state: String,
        event: String,
        #[source]
        cause: HookError,
    },

    /// The target state's do hook failed during an external transition.
    #[error("onDo External Transition error: State={state}, Event={event}")]
    Do {
        state: String,
        event: String,
        #[source]
        cause: HookError,
    },

    /// The state's do hook failed during an internal transition.
    #[error("onDo Internal Transition error: State={state}, Event={event}")]
    InternalDo {
        state: String,
        event: String,
        #[source]
        cause: HookError,
    },
}

impl TransitionError {
    /// Name of the state the error is reported against.
    ///
    /// For [`Exit`](Self::Exit) this is the source state; for
    /// [`Entry`](Self::Entry) and [`Do`](Self::Do) it is the target.
    pub fn state(&self) -> &str {
        match self {
            Self::Denied { state, .. }
            | Self::Exit { state, .. }
            | Self::Entry { state, .. }
            | Self::Do { state, .. }
            | Self::InternalDo { state, .. } => state,
        }
    }

    /// Debug rendering of the event that was fired.
    pub fn event(&self) -> &str {
        match self {
            Self::Denied { event, .. }
            | Self::Exit { event, .. }
            | Self::Entry { event, .. }
            | Self::Do { event, .. }
            | Self::InternalDo { event, .. } => event,
        }
    }

    /// The wrapped hook error, if any.
    ///
    /// `None` only for [`Denied`](Self::Denied), which originates in the
    /// transition decision rather than a hook.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Denied { .. } => None,
            Self::Exit { cause, .. }
            | Self::Entry { cause, .. }
            | Self::Do { cause, .. }
            | Self::InternalDo { cause, .. } => Some(cause.as_ref()),
        }
    }

    /// Check if this is a denial (the event was refused outright).
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("disk full")]
    struct DiskFull;

    fn entry_error() -> TransitionError {
        TransitionError::Entry {
            state: "On".to_string(),
            event: "TurnOn".to_string(),
            cause: Box::new(DiskFull),
        }
    }

    #[test]
    fn denied_message_has_expected_shape() {
        let err = TransitionError::Denied {
            state: "Off".to_string(),
            event: "TurnOff".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transition denied: State=Off, Event=TurnOff"
        );
    }

    #[test]
    fn hook_error_messages_carry_phase_prefix() {
        let cases: Vec<(TransitionError, &str)> = vec![
            (
                TransitionError::Exit {
                    state: "Off".into(),
                    event: "TurnOn".into(),
                    cause: Box::new(DiskFull),
                },
                "onExit External Transition error:",
            ),
            (entry_error(), "onEntry External Transition error:"),
            (
                TransitionError::Do {
                    state: "On".into(),
                    event: "TurnOn".into(),
                    cause: Box::new(DiskFull),
                },
                "onDo External Transition error:",
            ),
            (
                TransitionError::InternalDo {
                    state: "On".into(),
                    event: "Internal".into(),
                    cause: Box::new(DiskFull),
                },
                "onDo Internal Transition error:",
            ),
        ];

        for (err, prefix) in cases {
            assert!(
                err.to_string().starts_with(prefix),
                "{err} should start with {prefix}"
            );
        }
    }

    #[test]
    fn cause_is_preserved_and_downcastable() {
        let err = entry_error();
        let cause = err.cause().expect("entry error should carry a cause");
        assert_eq!(cause.downcast_ref::<DiskFull>(), Some(&DiskFull));
    }

    #[test]
    fn cause_is_reachable_through_error_source() {
        let err = entry_error();
        let source = err.source().expect("entry error should have a source");
        assert_eq!(source.downcast_ref::<DiskFull>(), Some(&DiskFull));
    }

    #[test]
    fn denied_has_no_cause() {
        let err = TransitionError::Denied {
            state: "Off".to_string(),
            event: "TurnOff".to_string(),
        };
        assert!(err.is_denied());
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn accessors_expose_diagnostic_fields() {
        let err = entry_error();
        assert_eq!(err.state(), "On");
        assert_eq!(err.event(), "TurnOn");
        assert!(!err.is_denied());
    }
}
