//! Error types for the intake library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all intake form and draft operations.
#[derive(Error, Debug)]
pub enum IntakeError {
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
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Step catalog failed its construction checks
    #[error("Invalid step catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// Navigation target outside the visible step sequence
    #[error("Step index {index} is out of range ({total} visible steps)")]
    StepOutOfRange { index: usize, total: usize },
    /// A list operation was applied to a scalar answer
    #[error("Answer '{key}' is not a repeatable group")]
    NotAList { key: String },
    /// A list operation addressed a record that does not exist
    #[error("Record {index} of '{key}' does not exist ({len} records)")]
    ListIndex { key: String, index: usize, len: usize },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> IntakeError {
        IntakeError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> IntakeError {
        IntakeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl IntakeError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a catalog error with the given reason.
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Wraps a tokio join failure from a blocking draft task.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
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
        self.map_err(|e| IntakeError::database(message).with_source(e))
    }
}

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;
