//! Error types for the roster application.
//!
//! Errors are split by concern and composed with `thiserror` so `?` carries
//! them up to `main` without manual mapping.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary
//!   - [`InputError`] - The one-time load of the roster failed (read or parse)
//!   - [`crate::config::ConfigError`] - Config file exists but is unreadable
//!   - [`crate::logging::LoggingError`] - Log file could not be opened
//!   - [`crate::view::TuiError`] - Terminal failures
//! - [`ValidationError`] - An edit was rejected; never escapes the edit flow
//!
//! # Recovery Strategy
//!
//! Only terminal failures are fatal. A failed load is shown to the operator
//! once and the application continues with an empty collection. A failed
//! validation keeps the row in editing so the operator can correct it.

use crate::model::RecordId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the roster from its source.
    ///
    /// Not fatal inside the TUI; `main` only sees this when the source is
    /// misconfigured before the terminal is set up.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to initialize logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Errors encountered when reading the roster from a file or stdin.
///
/// Every variant is a "fetch failure": reported once, leaves the collection
/// empty, no retry.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified roster file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No source was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The payload is not a JSON array of records.
    #[error("Invalid roster JSON: {reason}")]
    Parse {
        /// Parser diagnostic.
        reason: String,
    },

    /// Two records in the payload share an id.
    #[error("Duplicate record id '{id}' at index {index}")]
    DuplicateId {
        /// Zero-based position of the second occurrence.
        index: usize,
        /// The repeated id.
        id: RecordId,
    },

    /// Generic I/O error reading from the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Parse {
            reason: e.to_string(),
        }
    }
}

/// Reasons an edit save is rejected.
///
/// The `Display` text is what the operator sees in the blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is not letters and spaces, or is too short.
    #[error("Enter a valid name")]
    InvalidName,

    /// Email does not look like an address.
    #[error("Please enter a valid email")]
    InvalidEmail,

    /// The record was deleted while its row was in editing.
    #[error("Record '{0}' no longer exists")]
    UnknownRecord(RecordId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_no_input_display() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("No input source"));
        assert!(msg.contains("file path or pipe data to stdin"));
    }

    #[test]
    fn input_error_from_serde_json_is_parse() {
        let json_err = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let err: InputError = json_err.into();
        assert!(matches!(err, InputError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid roster JSON"));
    }

    #[test]
    fn input_error_duplicate_id_display() {
        let err = InputError::DuplicateId {
            index: 4,
            id: RecordId::new("7").unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'7'"));
        assert!(msg.contains("index 4"));
    }

    #[test]
    fn validation_messages_match_alert_text() {
        assert_eq!(ValidationError::InvalidName.to_string(), "Enter a valid name");
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email"
        );
    }

    #[test]
    fn app_error_nested_io_through_input_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let input_err: InputError = io_err.into();
        let app_err: AppError = input_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to read input"));
        assert!(msg.contains("IO error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn app_error_from_tui_error_is_terminal() {
        let tui_err: crate::view::TuiError =
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken").into();
        let app_err: AppError = tui_err.into();
        assert!(matches!(app_err, AppError::Tui(_)));
        assert!(app_err.to_string().contains("Terminal error"));
    }
}
