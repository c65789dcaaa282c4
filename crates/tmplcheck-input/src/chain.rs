//! Input chain for composing multiple sources.
//!
//! The [`InputChain`] tries sources in the order they were added. The first
//! source that returns `Some(value)` wins. If none does, the chain falls back
//! to its default or fails with [`InputError::NoInput`].

use tracing::debug;

use crate::collector::{InputCollector, InputSourceKind, ResolvedInput};
use crate::limits::{PayloadKind, DEFAULT_MAX_SIZE};
use crate::InputError;

/// Chain multiple input sources with fallback behavior.
///
/// Every resolved value, whatever its source, is checked against the size cap.
///
/// # Example
///
/// ```
/// use tmplcheck_input::{ArgSource, InputChain, InputSourceKind, MockStdin, PayloadKind, StdinSource};
///
/// let resolved = InputChain::new(PayloadKind::Data)
///     .try_source(ArgSource::new(None))
///     .try_source(StdinSource::with_reader(MockStdin::terminal()))
///     .default("{}")
///     .resolve()
///     .unwrap();
/// assert_eq!(resolved.value, "{}");
/// assert_eq!(resolved.source, InputSourceKind::Default);
/// ```
pub struct InputChain {
    kind: PayloadKind,
    sources: Vec<Box<dyn InputCollector>>,
    default: Option<String>,
    max_size: u64,
}

impl InputChain {
    /// Create a new empty chain for one payload.
    pub fn new(kind: PayloadKind) -> Self {
        Self {
            kind,
            sources: Vec::new(),
            default: None,
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Add a source to the chain.
    pub fn try_source<C: InputCollector + 'static>(mut self, source: C) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Set the value used when no source provides input.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the size cap in bytes.
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns the number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve the chain to its value.
    pub fn resolve(&self) -> Result<ResolvedInput, InputError> {
        for source in &self.sources {
            if !source.is_available() {
                continue;
            }
            if let Some(value) = source.collect()? {
                self.kind.check_size(value.len() as u64, self.max_size)?;
                debug!(kind = %self.kind, source = %source.kind(), bytes = value.len(), "input resolved");
                return Ok(ResolvedInput {
                    value,
                    source: source.kind(),
                });
            }
        }

        match &self.default {
            Some(value) => Ok(ResolvedInput {
                value: value.clone(),
                source: InputSourceKind::Default,
            }),
            None => Err(InputError::NoInput(self.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockStdin;
    use crate::sources::{ArgSource, StdinSource};

    #[test]
    fn empty_chain_without_default_fails() {
        let chain = InputChain::new(PayloadKind::Template);
        assert!(chain.is_empty());
        assert!(matches!(
            chain.resolve(),
            Err(InputError::NoInput(PayloadKind::Template))
        ));
    }

    #[test]
    fn first_available_source_wins() {
        let chain = InputChain::new(PayloadKind::Template)
            .try_source(ArgSource::new(Some("from arg".into())))
            .try_source(StdinSource::with_reader(MockStdin::piped("from stdin")));
        assert_eq!(chain.len(), 2);
        let resolved = chain.resolve().unwrap();
        assert_eq!(resolved.value, "from arg");
        assert_eq!(resolved.source, InputSourceKind::Arg);
    }

    #[test]
    fn falls_through_unavailable_sources() {
        let chain = InputChain::new(PayloadKind::Data)
            .try_source(ArgSource::new(None))
            .try_source(StdinSource::with_reader(MockStdin::piped("a: 1")));
        let resolved = chain.resolve().unwrap();
        assert_eq!(resolved.source, InputSourceKind::Stdin);
    }

    #[test]
    fn size_cap_applies_to_every_source() {
        let chain = InputChain::new(PayloadKind::Data)
            .try_source(StdinSource::with_reader(MockStdin::piped("0123456789")))
            .max_size(4);
        assert!(matches!(
            chain.resolve(),
            Err(InputError::TooLarge { size: 10, limit: 4, .. })
        ));
    }
}
