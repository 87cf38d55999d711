//! Window-level error type.

use crate::runtime::{BindError, LaunchError};
use crate::validate::ValidationReport;
use crate::window::WindowState;

/// Errors surfaced by the window lifecycle.
///
/// None of these are retried internally. A failed launch rarely succeeds
/// without operator intervention, and a rejected binding leaves the session
/// with a degraded callback set that the caller must decide about.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("cannot {operation} a window that is {state}")]
    InvalidState {
        operation: &'static str,
        state: WindowState,
    },
    #[error("validation failed: {0}")]
    Validation(ValidationReport),
    #[error("rendering runtime could not be launched: {0}")]
    RuntimeLaunch(#[from] LaunchError),
    #[error(transparent)]
    Binding(#[from] BindError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_message() {
        let err = WindowError::InvalidState {
            operation: "start",
            state: WindowState::Started,
        };
        assert_eq!(err.to_string(), "cannot start a window that is started");
    }

    #[test]
    fn launch_error_converts() {
        let err: WindowError = LaunchError::new("no chrome binary").into();
        assert!(matches!(err, WindowError::RuntimeLaunch(_)));
        assert_eq!(
            err.to_string(),
            "rendering runtime could not be launched: no chrome binary"
        );
    }

    #[test]
    fn bind_error_is_transparent() {
        let err: WindowError = BindError {
            name: "x".into(),
            reason: "taken".into(),
        }
        .into();
        assert_eq!(err.to_string(), "cannot bind `x`: taken");
    }
}
