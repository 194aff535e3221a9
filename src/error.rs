use std::io;
use thiserror::Error;

/// Errors raised by the world clock core
#[derive(Error, Debug)]
pub enum ClockError {
    /// The timezone database does not know this identifier
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Reading or writing durable storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// The persisted selection is not a valid JSON list of timezones
    #[error("Malformed persisted selection: {0}")]
    MalformedSelection(#[from] serde_json::Error),

    /// The periodic refresher could not be scheduled or stopped
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, ClockError>;
