//! Stdin input source.

use std::io;
use std::sync::Arc;

use crate::collector::{InputCollector, InputSourceKind};
use crate::env::{RealStdin, StdinReader};
use crate::limits::PayloadKind;
use crate::InputError;

/// Collect input from piped stdin.
///
/// Available only when stdin is piped. Content is passed through untouched:
/// whitespace is significant in templates. Empty input counts as "nothing
/// provided" so the chain can fall through to its default.
///
/// With [`StdinSource::limit`] set, at most one byte past the cap is read
/// before the source gives up with [`InputError::TooLarge`].
///
/// Use [`StdinSource::with_reader`] to inject a [`MockStdin`](crate::MockStdin)
/// in tests.
#[derive(Clone)]
pub struct StdinSource<R: StdinReader = RealStdin> {
    reader: Arc<R>,
    limit: Option<(PayloadKind, u64)>,
}

impl StdinSource<RealStdin> {
    pub fn new() -> Self {
        Self::with_reader(RealStdin)
    }
}

impl Default for StdinSource<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> StdinSource<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
            limit: None,
        }
    }

    /// Caps how many bytes of `kind` payload are read.
    pub fn limit(mut self, kind: PayloadKind, max_size: u64) -> Self {
        self.limit = Some((kind, max_size));
        self
    }
}

impl<R: StdinReader + 'static> InputCollector for StdinSource<R> {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Stdin
    }

    fn is_available(&self) -> bool {
        !self.reader.is_terminal()
    }

    fn collect(&self) -> Result<Option<String>, InputError> {
        if self.reader.is_terminal() {
            return Ok(None);
        }

        let cap = match self.limit {
            Some((_, max_size)) => max_size.saturating_add(1),
            None => u64::MAX,
        };
        let bytes = self
            .reader
            .read_capped(cap)
            .map_err(InputError::StdinFailed)?;
        if let Some((kind, max_size)) = self.limit {
            kind.check_size(bytes.len() as u64, max_size)?;
        }

        let content = String::from_utf8(bytes).map_err(|_| {
            InputError::StdinFailed(io::Error::new(
                io::ErrorKind::InvalidData,
                "stdin is not valid UTF-8",
            ))
        })?;

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}
