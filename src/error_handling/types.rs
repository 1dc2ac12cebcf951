//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Error types for the external classifier boundary.
///
/// All of these surface to the caller as "prediction unavailable"; the
/// heuristic assessment still proceeds.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The model file could not be read.
    #[error("Model file could not be read: {0}")]
    ModelRead(#[from] std::io::Error),

    /// The model file could not be parsed.
    #[error("Model file could not be parsed: {0}")]
    ModelParse(#[from] serde_json::Error),

    /// The model's weight count does not match the feature vector.
    #[error("Model expects {expected} weights, found {actual}")]
    BadShape {
        /// Required weight count (the feature vector arity).
        expected: usize,
        /// Weight count found in the model file.
        actual: usize,
    },

    /// The model produced a non-finite probability.
    #[error("Classifier produced a non-finite probability")]
    NonFiniteOutput,
}
