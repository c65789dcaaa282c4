//! Core input collector trait.
//!
//! The [`InputCollector`] trait defines the interface for all input sources.
//! Implementations are composed into an [`InputChain`](crate::InputChain)
//! that tries each one in order.

use std::fmt;

use crate::InputError;

/// A source that can provide payload text.
///
/// - [`is_available`](Self::is_available) returns `false` when the source
///   cannot apply at all (argument not given, stdin is a terminal).
/// - [`collect`](Self::collect) returns `Ok(None)` for "try the next source"
///   and `Err` only for real failures, which abort the chain.
pub trait InputCollector: Send + Sync {
    /// Which kind of source this is.
    fn kind(&self) -> InputSourceKind;

    fn is_available(&self) -> bool;

    fn collect(&self) -> Result<Option<String>, InputError>;
}

/// Payload text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub value: String,
    pub source: InputSourceKind,
}

/// The kind of source that provided input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSourceKind {
    /// Inline text from a CLI argument.
    Arg,
    /// Contents of a file.
    File,
    /// Piped stdin.
    Stdin,
    /// The chain's default value.
    Default,
}

impl fmt::Display for InputSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arg => write!(f, "argument"),
            Self::File => write!(f, "file"),
            Self::Stdin => write!(f, "stdin"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_display() {
        assert_eq!(InputSourceKind::Arg.to_string(), "argument");
        assert_eq!(InputSourceKind::File.to_string(), "file");
        assert_eq!(InputSourceKind::Stdin.to_string(), "stdin");
    }
}
