//! Error types for the host layer.

use thiserror::Error;

use crate::decode::BoundaryExit;
use crate::heap::UnwindToken;

/// Errors raised by the call table before a native entry point runs.
#[derive(Debug, PartialEq, Error)]
pub enum DispatchError {
    /// No operation with this name was registered.
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// The argument count did not match the registered arity.
    #[error("operation {name} expects {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// An operation with this name was already registered.
    #[error("duplicate operation: {name}")]
    Duplicate { name: &'static str },

    /// The table was already published; registration is closed.
    #[error("call table already published")]
    AlreadyPublished,

    /// The table has not been published; nothing is reachable yet.
    #[error("call table not published")]
    NotPublished,
}

/// The host-visible outcome of a call that did not produce a value.
#[derive(Debug, PartialEq, Error)]
pub enum CallError {
    /// Dispatch failed before the native call ran.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The native side failed; the message surfaces verbatim.
    #[error("{0}")]
    Native(String),

    /// A host unwind crossed the native frame. Not truly an error: resume
    /// it, never display it.
    #[error("host unwind in progress")]
    Unwind(UnwindToken),
}

impl From<BoundaryExit> for CallError {
    fn from(exit: BoundaryExit) -> Self {
        match exit {
            BoundaryExit::Raise(message) => CallError::Native(message),
            BoundaryExit::Unwind(token) => CallError::Unwind(token),
        }
    }
}

/// Result type alias for boundary calls.
pub type Result<T> = std::result::Result<T, CallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_display() {
        let e = DispatchError::UnknownOperation {
            name: "resize".to_string(),
        };
        assert_eq!(format!("{}", e), "unknown operation: resize");

        let e = DispatchError::Arity {
            name: "window_open",
            expected: 1,
            got: 3,
        };
        assert_eq!(
            format!("{}", e),
            "operation window_open expects 1 argument(s), got 3"
        );
    }

    #[test]
    fn native_error_displays_the_message_verbatim() {
        let e = CallError::Native("invalid title: empty string".to_string());
        assert_eq!(format!("{}", e), "invalid title: empty string");
    }

    #[test]
    fn dispatch_error_is_transparent() {
        let e = CallError::from(DispatchError::NotPublished);
        assert_eq!(format!("{}", e), "call table not published");
    }

    #[test]
    fn boundary_exit_conversion() {
        let e: CallError = BoundaryExit::Raise("boom".to_string()).into();
        assert_eq!(e, CallError::Native("boom".to_string()));
    }
}
