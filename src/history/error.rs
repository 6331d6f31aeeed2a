//! Game log error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Game log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game log error: {} at {}:{}", message, file, line)]
pub struct LogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LogError {
    /// Creates a new log error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LogError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
