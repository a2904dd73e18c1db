use thiserror::Error;

use crate::models::BatchResult;

/// Errors a label store can report for a single request
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Label not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    /// Anything the store could not classify. Aborts the batch.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// Errors that stop a batch before or while it runs
#[derive(Error, Debug)]
pub enum RemoveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No label selected")]
    NoLabelSelected,

    /// Unclassified failure; `partial` holds the outcomes collected before it
    #[error("{message}")]
    Fatal {
        partial: BatchResult,
        message: String,
    },
}
