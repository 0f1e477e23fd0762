//! In-memory output capture.
//!
//! `OutputCatcher` is a cloneable sink: hand one clone to a printer and read
//! the captured text through another.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default line length kept in safe mode before truncation.
pub const DEFAULT_MAX_LENGTH: usize = 160;

/// Captures everything written to it.
#[derive(Debug, Clone, Default)]
pub struct OutputCatcher {
    buffer: Arc<Mutex<Vec<u8>>>,
    safe: bool,
    max_length: Option<usize>,
}

impl OutputCatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catcher whose `lines` are escaped and cut at `max_length` characters.
    pub fn safe(max_length: Option<usize>) -> Self {
        Self {
            buffer: Arc::default(),
            safe: true,
            max_length,
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, unmodified.
    pub fn raw(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Non-empty captured lines, escaped and truncated in safe mode.
    pub fn lines(&self) -> Vec<String> {
        self.raw()
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| if self.safe { self.safe_line(line) } else { line.to_string() })
            .collect()
    }

    /// Captured lines joined with `\n`.
    pub fn output(&self) -> String {
        self.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn safe_line(&self, line: &str) -> String {
        let escaped = line.escape_debug().to_string();
        match self.max_length {
            Some(max) if escaped.chars().count() > max => {
                let kept: String = escaped.chars().take(max).collect();
                format!("{} (..truncated)", kept)
            }
            _ => escaped,
        }
    }
}

impl Write for OutputCatcher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catches_writes_through_clones() {
        let catcher = OutputCatcher::new();
        let mut writer = catcher.clone();
        writer.write_all(b"first\n\nsecond\n").unwrap();

        assert_eq!(catcher.raw(), "first\n\nsecond\n");
        assert_eq!(catcher.lines(), vec!["first", "second"]);
        assert_eq!(catcher.output(), "first\nsecond");

        catcher.clear();
        assert!(catcher.is_empty());
        assert_eq!(catcher.output(), "");
    }

    #[test]
    fn test_safe_mode() {
        let catcher = OutputCatcher::safe(Some(4));
        let mut writer = catcher.clone();
        writer.write_all(b"tab\there\nok\n").unwrap();
        assert_eq!(catcher.lines(), vec!["tab\\ (..truncated)", "ok"]);
    }
}
