//! Inline argument source.

use crate::collector::{InputCollector, InputSourceKind};
use crate::InputError;

/// Inline text passed as a CLI argument.
///
/// Available whenever a value was given, including an empty one: an explicit
/// empty argument is a deliberate choice and is not skipped.
#[derive(Debug, Clone, Default)]
pub struct ArgSource {
    value: Option<String>,
}

impl ArgSource {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }
}

impl InputCollector for ArgSource {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Arg
    }

    fn is_available(&self) -> bool {
        self.value.is_some()
    }

    fn collect(&self) -> Result<Option<String>, InputError> {
        Ok(self.value.clone())
    }
}
