// error.rs

//! # Error Handling Module
//!
//! Top-level error type for the `dbtools` binary and for callers that want a
//! single error across config loading and connecting.
//!
//! # Usage Example
//! ```rust
//! use dbtools::error::AppError;
//!
//! fn example_function() -> Result<(), AppError> {
//!     Err(AppError::CommandFailed("nothing to do".to_string()))
//! }
//! ```

use std::error::Error;
use std::fmt;

use crate::config::keypair::ConfigError;
use crate::utils::connection::DbError;

// ============================
// Application Error Definitions
// ============================

/// Represents errors that may occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// A config file could not be read.
    Config(ConfigError),

    /// Connecting to or querying the database failed.
    Database(DbError),

    /// Error returned when a command fails to execute.
    CommandFailed(String),

    /// Wrapper for standard I/O errors.
    IoError(std::io::Error),
}

// ============================
// Display Trait Implementation
// ============================

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Config error: {}", err),
            Self::Database(err) => write!(f, "Database error: {}", err),
            Self::CommandFailed(msg) => write!(f, "Command failed: {}", msg),
            Self::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

// ============================
// Error Trait Implementation
// ============================

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Database(err) => Some(err),
            Self::CommandFailed(_) => None,
            Self::IoError(err) => Some(err),
        }
    }
}

// ============================
// Conversions
// ============================

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<DbError> for AppError {
    fn from(error: DbError) -> Self {
        Self::Database(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::CommandFailed(format!("could not serialize output: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_error_is_wrapped_with_source() {
        let err: AppError = ConfigError::Io {
            path: PathBuf::from("db.ini"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        assert!(err.to_string().starts_with("Config error: could not read config file db.ini"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_port_message() {
        let err: AppError = DbError::InvalidPort("abc".to_string()).into();
        assert_eq!(err.to_string(), "Database error: invalid port number 'abc'");
    }
}
