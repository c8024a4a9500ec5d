/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Result type for store (parse/persistence) operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for the application layer
pub type AppResult<T> = Result<T, AppError>;

/// Errors produced by the queue core.
///
/// All three are local, recoverable conditions: a failed operation leaves
/// the queue exactly as it was.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Out of memory: {0}")]
    #[diagnostic(
        code(queue::out_of_memory),
        help("Node allocation failed. Free memory or retry with fewer elements.")
    )]
    OutOfMemory(String),

    #[error("Queue is empty")]
    #[diagnostic(
        code(queue::empty),
        help("Nothing to remove. Check is_empty() before popping.")
    )]
    EmptyQueue,

    #[error("Index {index} out of range for queue of length {len}")]
    #[diagnostic(
        code(queue::index_out_of_range),
        help("Valid indices are 0..len. The queue was left unchanged.")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors produced by the store layer (text parsing and the two-line file).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum StoreError {
    #[error("I/O error: {0}")]
    #[diagnostic(
        code(store::io),
        help("Filesystem operation failed. Check the path and permissions.")
    )]
    Io(String),

    #[error("Invalid number: {token:?}")]
    #[diagnostic(
        code(store::parse),
        help("Every token must be a decimal integer, separated by whitespace.")
    )]
    Parse { token: String },
}

impl StoreError {
    /// Convert an io::Error, keeping the operation context.
    pub(crate) fn io(context: impl Into<String>, err: &std::io::Error) -> Self {
        StoreError::Io(format!("{}: {}", context.into(), err))
    }
}

/// Unified application error with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("Queue error: {0}")]
    #[diagnostic(transparent)]
    Queue(#[from] QueueError),

    #[error("Store error: {0}")]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(app::io),
        help("Reading input or writing output failed. Check the console and paths.")
    )]
    Io(String),

    #[error("Invalid arguments: {0}")]
    #[diagnostic(
        code(app::usage),
        help("Run with no arguments for the menu, or use --file <path> / --benchmark-auto.")
    )]
    Usage(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_error_display() {
        let err = QueueError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 out of range for queue of length 3");
        assert_eq!(QueueError::EmptyQueue.to_string(), "Queue is empty");
    }

    #[test]
    fn queue_error_serialization() {
        let err = QueueError::OutOfMemory("node allocation failed".into());
        let json = serde_json::to_string(&err).unwrap();
        let back: QueueError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn store_error_keeps_token() {
        let err = StoreError::Parse { token: "12x".into() };
        assert_eq!(err.to_string(), "Invalid number: \"12x\"");
    }

    #[test]
    fn app_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn app_error_from_queue() {
        let err: AppError = QueueError::EmptyQueue.into();
        assert!(matches!(err, AppError::Queue(QueueError::EmptyQueue)));
    }
}
