//! Error types for ide-bridge.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for ide-bridge operations.
///
/// Each variant maps to a process exit code for the CLI.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// User provided invalid arguments or the project is in an unusable state.
    #[error("{0}")]
    UserError(String),

    /// The tool configuration file could not be read or is invalid.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// No editor installation matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The editor process could not be started.
    #[error("Launch failed: {0}")]
    LaunchError(String),
}

impl BridgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::UserError(_) => exit_codes::USER_ERROR,
            BridgeError::ConfigError(_) => exit_codes::USER_ERROR,
            BridgeError::IoError(_) => exit_codes::USER_ERROR,
            BridgeError::NotFound(_) => exit_codes::NOT_FOUND,
            BridgeError::LaunchError(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for ide-bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_map_to_user_error() {
        assert_eq!(
            BridgeError::UserError("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            BridgeError::ConfigError("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(
            BridgeError::IoError("denied".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn not_found_has_correct_exit_code() {
        let err = BridgeError::NotFound("no Cursor installation".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn launch_error_has_correct_exit_code() {
        let err = BridgeError::LaunchError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::LAUNCH_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = BridgeError::ConfigError("extension_id must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: extension_id must not be empty"
        );

        let err = BridgeError::LaunchError("no such file".to_string());
        assert_eq!(err.to_string(), "Launch failed: no such file");
    }
}
