//! Error types for idfmt-core
//!
//! Every failure carries a stable code and a severity so the binary can
//! report it consistently, with suggestions where there is something the
//! user can do about it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No identifier was supplied
    EmptyInput,
    /// The platform refused or failed the clipboard write
    ClipboardDenied,
    /// Input is not a decimal identifier
    InvalidIdentifier,
    /// Identifier does not fit the requested representation
    OutOfRange,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::EmptyInput => write!(f, "EMPTY_INPUT"),
            ErrorCode::ClipboardDenied => write!(f, "CLIPBOARD_DENIED"),
            ErrorCode::InvalidIdentifier => write!(f, "INVALID_IDENTIFIER"),
            ErrorCode::OutOfRange => write!(f, "OUT_OF_RANGE"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational, a normal-path outcome
    Info,
    /// Warning - operation skipped
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

impl ErrorSeverity {
    /// Log level for reporting an error of this severity
    pub fn log_level(&self) -> log::Level {
        match self {
            ErrorSeverity::Info => log::Level::Info,
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Error => log::Level::Error,
        }
    }
}

/// Detailed error information for reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Failure reported by a clipboard backend
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Main error type for idfmt-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No identifier given")]
    EmptyInput,

    #[error("Failed to copy identifier to clipboard: {source}")]
    ClipboardDenied {
        #[source]
        source: ClipboardError,
    },

    #[error("Invalid identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: String },

    #[error("Identifier out of range: {value}")]
    OutOfRange { value: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EmptyInput => ErrorCode::EmptyInput,
            CoreError::ClipboardDenied { .. } => ErrorCode::ClipboardDenied,
            CoreError::InvalidIdentifier { .. } => ErrorCode::InvalidIdentifier,
            CoreError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::EmptyInput => ErrorSeverity::Info,
            CoreError::ClipboardDenied { .. } => ErrorSeverity::Error,
            CoreError::InvalidIdentifier { .. } => ErrorSeverity::Warning,
            CoreError::OutOfRange { .. } => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ClipboardDenied { .. } => {
                details = details.with_suggestion(
                    "Check that a desktop session with clipboard access is available.".to_string()
                );
                details = details.with_suggestion(
                    "Use `idfmt format` and copy the output manually.".to_string()
                );
            }
            CoreError::InvalidIdentifier { input, .. } => {
                details = details.with_detail(serde_json::json!({ "input": input }));
                details = details.with_suggestion(
                    "Identifiers are decimal digits, optionally grouped with the configured separator.".to_string()
                );
            }
            CoreError::OutOfRange { value } => {
                details = details.with_detail(serde_json::json!({ "value": value }));
                details = details.with_suggestion(
                    "Snowflake identifiers must fit in 64 bits.".to_string()
                );
            }
            CoreError::EmptyInput => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::EmptyInput.to_string(), "EMPTY_INPUT");
        assert_eq!(ErrorCode::ClipboardDenied.to_string(), "CLIPBOARD_DENIED");
        assert_eq!(ErrorCode::InvalidIdentifier.to_string(), "INVALID_IDENTIFIER");
    }

    #[test]
    fn test_error_code_serializes_like_display() {
        let json = serde_json::to_string(&ErrorCode::OutOfRange).unwrap();
        assert_eq!(json, "\"OUT_OF_RANGE\"");
    }

    #[test]
    fn test_core_error_severity() {
        assert_eq!(CoreError::EmptyInput.severity(), ErrorSeverity::Info);

        let error = CoreError::ClipboardDenied {
            source: ClipboardError::WriteFailed("denied".to_string()),
        };
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert_eq!(error.code(), ErrorCode::ClipboardDenied);
    }

    #[test]
    fn test_severity_log_level() {
        assert_eq!(CoreError::EmptyInput.severity().log_level(), log::Level::Info);

        let error = CoreError::InvalidIdentifier {
            input: "-12".to_string(),
            reason: "stray separator".to_string(),
        };
        assert_eq!(error.severity().log_level(), log::Level::Warn);

        let error = CoreError::ClipboardDenied {
            source: ClipboardError::Unavailable("headless".to_string()),
        };
        assert_eq!(error.severity().log_level(), log::Level::Error);
    }

    #[test]
    fn test_clipboard_denied_keeps_cause() {
        let error = CoreError::ClipboardDenied {
            source: ClipboardError::Unavailable("no display".to_string()),
        };
        assert!(error.to_string().contains("no display"));
        let cause = error.source().map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("clipboard unavailable: no display"));
        assert_eq!(error.to_details().suggestions.len(), 2);
    }

    #[test]
    fn test_invalid_identifier_details() {
        let error = CoreError::InvalidIdentifier {
            input: "12ab".to_string(),
            reason: "not a decimal number".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::InvalidIdentifier);
        assert_eq!(details.details, Some(serde_json::json!({ "input": "12ab" })));
        assert!(details.to_string().starts_with("[INVALID_IDENTIFIER] Invalid identifier '12ab'"));
    }
}
