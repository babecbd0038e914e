//! Error handling for wordlist-forge

use std::path::Path;
use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Could not parse date '{input}'. Use format YYYY-MM-DD.")]
    InvalidDate { input: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Input too large: {what} has {size}, limit is {limit}")]
    InputTooLarge {
        what: String,
        size: usize,
        limit: usize,
    },

    #[error("Missing input: provide at least a name, date, or pet name")]
    MissingInput,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ForgeError {
    /// Create an invalid date error echoing the offending text
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an IO error from an underlying cause and the path it concerns
    pub fn io_at(err: &std::io::Error, path: &Path) -> Self {
        Self::io(err.to_string(), Some(path.to_string_lossy().to_string()))
    }

    /// Create an input-too-large error
    pub fn input_too_large(what: impl Into<String>, size: usize, limit: usize) -> Self {
        Self::InputTooLarge {
            what: what.into(),
            size,
            limit,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an analysis error
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDate { input } => {
                format!("❌ Could not parse date '{}'\n💡 Use format YYYY-MM-DD, e.g. 1995-03-07", input)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Error writing to file{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::InputTooLarge { what, size, limit } => {
                format!("❌ Input too large: {} is {} (limit {})\n💡 Use shorter name or pet values", what, size, limit)
            }
            Self::MissingInput => {
                "⚠️  Missing input\n💡 Please provide at least a Name, Date, or Pet Name for generation".to_string()
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or environment", message)
            }
            Self::Analysis { message } => {
                format!("❌ Password analysis failed: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::ForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::ForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ForgeError::config(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_echoes_input() {
        let err = ForgeError::invalid_date("not-a-date");
        assert!(err.to_string().contains("not-a-date"));
        assert!(err.user_message().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_io_error_surfaces_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = ForgeError::io_at(&cause, Path::new("/tmp/out.txt"));
        assert!(err.to_string().contains("permission denied"));
        assert!(err.user_message().contains("/tmp/out.txt"));
    }

    #[test]
    fn test_macros() {
        let err = validation_error!("year window {} out of range", 99);
        assert_eq!(err, ForgeError::validation("year window 99 out of range"));
        let err = config_error!("bad value");
        assert!(err.to_string().contains("bad value"));
    }
}
