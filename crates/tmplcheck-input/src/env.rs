//! Stdin abstraction for testability.
//!
//! [`StdinReader`] lets tests simulate piped or interactive stdin without
//! touching the real process stdin.

use std::io::{self, IsTerminal, Read};

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read at most `limit` bytes from stdin.
    ///
    /// This should only be called if `is_terminal()` returns `false`.
    fn read_capped(&self, limit: u64) -> io::Result<Vec<u8>>;
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_capped(&self, limit: u64) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        std::io::stdin().lock().take(limit).read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Option<String>,
}

impl MockStdin {
    /// A terminal with nothing piped.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: None,
        }
    }

    /// Piped input with the given content.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: Some(content.into()),
        }
    }

    /// Piped input that is empty.
    pub fn piped_empty() -> Self {
        Self::piped(String::new())
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_capped(&self, limit: u64) -> io::Result<Vec<u8>> {
        let content = self.content.as_deref().unwrap_or_default().as_bytes();
        let end = usize::try_from(limit).unwrap_or(usize::MAX).min(content.len());
        Ok(content[..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_stdin_terminal() {
        assert!(MockStdin::terminal().is_terminal());
    }

    #[test]
    fn mock_stdin_piped() {
        let stdin = MockStdin::piped("hello world");
        assert!(!stdin.is_terminal());
        assert_eq!(stdin.read_capped(u64::MAX).unwrap(), b"hello world");
    }

    #[test]
    fn mock_stdin_stops_at_limit() {
        let stdin = MockStdin::piped("hello world");
        assert_eq!(stdin.read_capped(5).unwrap(), b"hello");
    }

    #[test]
    fn mock_stdin_piped_empty() {
        let stdin = MockStdin::piped_empty();
        assert!(!stdin.is_terminal());
        assert!(stdin.read_capped(u64::MAX).unwrap().is_empty());
    }
}
