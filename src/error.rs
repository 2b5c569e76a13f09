//! Unified error types for slackpack.
//!
//! This module provides a single [`SlackpackError`] enum that covers every
//! failure in the conversion pipeline. Every error is fatal: the conversion
//! is all-or-nothing, so callers either get a complete CSV or an error.
//!
//! # Error Kinds
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InputNotFound`](SlackpackError::InputNotFound) | [`ensure_input`](crate::ensure_input) |
//! | [`Parse`](SlackpackError::Parse) | user directory and per-day document loading |
//! | [`Schema`](SlackpackError::Schema) | user objects without a usable name, messages without `user` |
//! | [`UnresolvedUser`](SlackpackError::UnresolvedUser) | author lookup and bare mentions |
//! | [`InvalidTimestamp`](SlackpackError::InvalidTimestamp) | `ts` parsing |
//! | [`Write`](SlackpackError::Write) / [`Csv`](SlackpackError::Csv) | the CSV writer |

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for slackpack operations.
pub type Result<T> = std::result::Result<T, SlackpackError>;

/// The kind of input path that was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A directory of per-day documents
    Directory,
    /// A single file (the user directory)
    File,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Directory => write!(f, "directory"),
            InputKind::File => write!(f, "file"),
        }
    }
}

/// The error type for all slackpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackpackError {
    /// An input path is missing or is not the expected kind.
    #[error("Input {kind} does not exist: {}", path.display())]
    InputNotFound {
        /// What the path should have been
        kind: InputKind,
        /// The offending path
        path: PathBuf,
    },

    /// An I/O error occurred while reading input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A document is not valid JSON of the expected shape.
    #[error("Failed to parse {what}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// Which document was being parsed (e.g. "user directory")
        what: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A record is structurally valid JSON but misses a required field.
    #[error("Schema error: {message}")]
    Schema {
        /// Description of what's missing
        message: String,
    },

    /// A message author or mention references an id absent from the directory.
    #[error("Unresolved user id '{id}'")]
    UnresolvedUser {
        /// The unknown user id
        id: String,
    },

    /// A message `ts` is missing or is not a seconds-since-epoch float.
    #[error("Invalid message timestamp '{value}'")]
    InvalidTimestamp {
        /// The raw `ts` value (empty if missing)
        value: String,
    },

    /// The output file could not be created or written.
    #[error("Cannot write output file {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackpackError {
    /// Creates an input-not-found error.
    pub fn input_not_found(kind: InputKind, path: impl Into<PathBuf>) -> Self {
        SlackpackError::InputNotFound {
            kind,
            path: path.into(),
        }
    }

    /// Creates a parse error for the user directory document.
    pub fn users_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        SlackpackError::Parse {
            what: "user directory",
            source,
            path,
        }
    }

    /// Creates a parse error for a per-day message document.
    pub fn day_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        SlackpackError::Parse {
            what: "per-day document",
            source,
            path,
        }
    }

    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        SlackpackError::Schema {
            message: message.into(),
        }
    }

    /// Creates an unresolved user error.
    pub fn unresolved_user(id: impl Into<String>) -> Self {
        SlackpackError::UnresolvedUser { id: id.into() }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        SlackpackError::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Creates a write error for the given destination.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SlackpackError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        SlackpackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an input-not-found error.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, SlackpackError::InputNotFound { .. })
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, SlackpackError::Parse { .. })
    }

    /// Returns `true` if this is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self, SlackpackError::Schema { .. })
    }

    /// Returns `true` if a user id could not be resolved.
    pub fn is_unresolved_user(&self) -> bool {
        matches!(self, SlackpackError::UnresolvedUser { .. })
    }

    /// Returns `true` if writing the output failed.
    pub fn is_write(&self) -> bool {
        matches!(self, SlackpackError::Write { .. } | SlackpackError::Csv(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = SlackpackError::input_not_found(InputKind::Directory, "/no/such/dir");
        let display = err.to_string();
        assert!(display.contains("directory"));
        assert!(display.contains("/no/such/dir"));
        assert!(err.is_input_not_found());
    }

    #[test]
    fn test_parse_error_with_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = SlackpackError::users_parse(json_err, Some(PathBuf::from("/tmp/users.json")));
        let display = err.to_string();
        assert!(display.contains("user directory"));
        assert!(display.contains("/tmp/users.json"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_parse_error_without_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = SlackpackError::day_parse(json_err, None);
        let display = err.to_string();
        assert!(display.contains("per-day document"));
        assert!(!display.contains("file:"));
    }

    #[test]
    fn test_unresolved_user_display() {
        let err = SlackpackError::unresolved_user("U999");
        assert_eq!(err.to_string(), "Unresolved user id 'U999'");
        assert!(err.is_unresolved_user());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_write_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = SlackpackError::write("/root/out.csv", io_err);
        let display = err.to_string();
        assert!(display.contains("/root/out.csv"));
        assert!(display.contains("denied"));
        assert!(err.is_write());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = SlackpackError::invalid_date("2024/01/01");
        let display = err.to_string();
        assert!(display.contains("2024/01/01"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SlackpackError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SlackpackError::day_parse(json_err, None);
        assert!(err.source().is_some());
    }
}
