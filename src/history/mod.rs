//! Game history: the log sink the engine reports results to, and its
//! plain-text file implementation.

mod error;
mod file;

pub use error::LogError;
pub use file::GameLog;

/// Consumes result lines produced by the engine.
pub trait LogSink {
    /// Records one line (without trailing newline).
    fn log(&mut self, line: &str);
}

/// In-memory sink.
impl LogSink for Vec<String> {
    fn log(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
