//! Error handling module for lintstrap
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for lintstrap
#[derive(Error, Debug)]
pub enum SetupError {
    /// IO errors (file operations, terminal, child processes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt errors (selector could not read an answer)
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Unknown package manager name (defensive; the selector constrains choices)
    #[error("Unsupported package manager: {0}")]
    UnsupportedManager(String),

    /// A spawned command exited with a non-zero status
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for lintstrap operations
pub type Result<T> = std::result::Result<T, SetupError>;

// Convenient error constructors
impl SetupError {
    /// Create a prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }

    /// Create an unsupported-manager error
    pub fn unsupported_manager(name: impl Into<String>) -> Self {
        Self::UnsupportedManager(name.into())
    }

    /// Create a command execution error
    pub fn command_failed(msg: impl Into<String>) -> Self {
        Self::CommandFailed(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetupError::unsupported_manager("bun");
        assert_eq!(err.to_string(), "Unsupported package manager: bun");

        let err = SetupError::command_failed("npm exec husky init (exit code 1)");
        assert_eq!(
            err.to_string(),
            "Command execution failed: npm exec husky init (exit code 1)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = SetupError::prompt("terminal closed");
        assert!(matches!(err, SetupError::Prompt(_)));

        let err = SetupError::general("something went wrong");
        assert!(matches!(err, SetupError::General(_)));
    }
}
