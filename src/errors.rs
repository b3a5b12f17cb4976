//! Unified application error type.
//! Store, adapter and CLI layers all return AppError so callers only ever
//! match on a single taxonomy.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Argument / parsing errors
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed timestamp: '{0}' (expected YYYY-MM-DD HH:MM:SS)")]
    MalformedTimestamp(String),

    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Event #{0} not found")]
    NotFound(i64),

    #[error("No event is currently in progress")]
    NothingInProgress,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
