//! Error types for the briefing library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all local briefing operations.
///
/// Remote sync failures are reported through [`crate::sync::SyncError`]
/// and never convert into this type.
#[derive(Error, Debug)]
pub enum BriefError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Key-value store rejected a read or write
    #[error("Storage error: {message}")]
    Storage { message: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// An edit referenced a key the schema does not declare
    #[error("Unknown field '{key}'")]
    UnknownField { key: String },
    /// An edit used the wrong operation for the field's declared kind
    #[error("Field '{key}' is not a {expected} field")]
    FieldTypeMismatch { key: String, expected: &'static str },
    /// A choice edit used an option outside the field's vocabulary
    #[error("Option '{option}' is not offered by field '{key}'")]
    UnknownOption { key: String, option: String },
    /// A wizard action is not valid on the current screen
    #[error("Cannot {action} from the {screen} screen")]
    InvalidTransition {
        action: &'static str,
        screen: &'static str,
    },
    /// Schema authoring error detected at construction time
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },
    /// Briefing not found in the local log
    #[error("Briefing with ID {id} not found")]
    BriefingNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl BriefError {
    /// Creates a new database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a schema authoring error.
    pub fn invalid_schema(reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BriefError::database(message, e))
    }
}

/// Result type alias for briefing operations
pub type Result<T> = std::result::Result<T, BriefError>;
