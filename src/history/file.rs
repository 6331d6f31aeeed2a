//! Append-only plain-text game log.

use super::{LogError, LogSink};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Buffers result lines during a session and appends them to a file.
///
/// One line per completed game, newline-terminated, no header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLog {
    path: PathBuf,
    lines: Vec<String>,
}

impl GameLog {
    /// Creates a log targeting `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: Vec::new(),
        }
    }

    /// Returns the target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines buffered since the last save.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Appends every buffered line to the file, creating it if needed.
    ///
    /// Written lines leave the buffer, even when a later line fails, so a
    /// retried save never writes the same line twice.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if the file cannot be opened or written.
    #[instrument(skip(self), fields(path = %self.path.display(), count = self.lines.len()))]
    pub fn save(&mut self) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LogError::new(format!("Failed to open '{}': {}", self.path.display(), e))
            })?;

        let written = self.append_to(&mut file)?;
        info!(count = written, "Game log saved");
        Ok(())
    }

    /// Writes buffered lines in order, dropping each from the buffer once
    /// it is written. Returns how many were written.
    fn append_to<W: Write>(&mut self, out: &mut W) -> Result<usize, LogError> {
        let mut written = 0;
        let result = self.lines.iter().try_for_each(|line| {
            writeln!(out, "{}", line)?;
            written += 1;
            Ok::<(), std::io::Error>(())
        });
        self.lines.drain(..written);
        if let Err(e) = result {
            warn!(written, remaining = self.lines.len(), error = %e, "Game log write interrupted");
            return Err(e.into());
        }
        out.flush()?;
        Ok(written)
    }

    /// Reads the whole file as-is, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] for any failure other than a missing file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<String>, LogError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!(bytes = content.len(), "Game log loaded");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No game log found");
                Ok(None)
            }
            Err(e) => Err(LogError::new(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Reads the file split into lines; empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] for any failure other than a missing file.
    pub fn load_lines(&self) -> Result<Vec<String>, LogError> {
        Ok(self
            .load()?
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }
}

impl LogSink for GameLog {
    fn log(&mut self, line: &str) {
        debug!(line, "Buffering log line");
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffers_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_log.txt");
        let mut log = GameLog::new(&path);
        log.log("Winner: X");
        assert_eq!(log.lines(), ["Winner: X"]);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_clears_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = GameLog::new(dir.path().join("game_log.txt"));
        log.log("Result: Draw");
        log.save().unwrap();
        assert!(log.lines().is_empty());
        log.save().unwrap();
        assert_eq!(log.load_lines().unwrap(), ["Result: Draw"]);
    }

    /// Accepts `budget` bytes, then fails every write.
    struct ShortWriter {
        data: Vec<u8>,
        budget: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::other("disk full"));
            }
            let n = buf.len().min(self.budget);
            self.data.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_interrupted_write_keeps_only_unwritten_lines() {
        let mut log = GameLog::new("unused.txt");
        log.log("Winner: X");
        log.log("Result: Draw");
        log.log("Winner: O");

        let mut short = ShortWriter {
            data: Vec::new(),
            budget: "Winner: X\n".len(),
        };
        assert!(log.append_to(&mut short).is_err());
        assert_eq!(short.data, b"Winner: X\n");
        assert_eq!(log.lines(), ["Result: Draw", "Winner: O"]);

        let mut retry = Vec::new();
        assert_eq!(log.append_to(&mut retry).unwrap(), 2);
        assert_eq!(retry, b"Result: Draw\nWinner: O\n");
        assert!(log.lines().is_empty());
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let log = GameLog::new(dir.path().join("absent.txt"));
        assert_eq!(log.load().unwrap(), None);
        assert!(log.load_lines().unwrap().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = GameLog::new(dir.path().join("no_such_dir").join("log.txt"));
        log.log("Winner: O");
        let err = log.save().unwrap_err();
        assert!(err.message.contains("Failed to open"));
        assert_eq!(log.lines(), ["Winner: O"]);
    }
}
