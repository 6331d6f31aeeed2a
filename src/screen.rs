//! Display sink for board renderings and status messages.

use std::io::Write;
use tracing::warn;

/// Receives everything the engine shows to the players.
pub trait Screen {
    /// Shows one block of text.
    fn show(&mut self, text: &str);
}

/// Writes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn show(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", text) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Collects shown text, one entry per call.
impl Screen for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn show(&mut self, _text: &str) {}
}
