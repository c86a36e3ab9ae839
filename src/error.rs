//! Error types for the Notice Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling notice and leave.

use thiserror::Error;

/// The main error type for the Notice Engine.
///
/// Every calculation either produces a complete result or fails with one of
/// these variants; partially computed results are never returned.
///
/// # Example
///
/// ```
/// use notice_engine::error::EngineError;
///
/// let error = EngineError::InvalidNoticeUnit {
///     unit: "weeks".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid notice unit 'weeks': expected days or months"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calendar date was malformed or fell outside the representable range.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The offending value, as text.
        value: String,
        /// A description of what made the date invalid.
        message: String,
    },

    /// A notice period used a unit other than days or months.
    #[error("Invalid notice unit '{unit}': expected days or months")]
    InvalidNoticeUnit {
        /// The unit that was supplied.
        unit: String,
    },

    /// An input was well-typed but violated a precondition.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building an [`EngineError::InvalidDate`].
    pub fn invalid_date(value: impl ToString, message: impl Into<String>) -> Self {
        EngineError::InvalidDate {
            value: value.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
