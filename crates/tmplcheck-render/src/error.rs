//! Error types for the check pipeline.
//!
//! This module provides [`CheckError`], the tagged failure type shared by the
//! data parser, the validator and the renderer. Each variant carries the
//! human-readable detail; the `Display` impl adds the prefix users see.

use std::fmt;

use thiserror::Error;

/// A classified failure from one stage of the pipeline.
///
/// Callers branch on the variant (or on [`CheckError::kind`]) instead of
/// inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The data payload parsed as neither JSON nor YAML.
    #[error("Invalid data format: {0}")]
    Data(String),

    /// The template grammar is malformed.
    #[error("Template syntax error: {0}")]
    Syntax(String),

    /// Compiling the template failed for a reason other than syntax.
    #[error("Error validating template: {0}")]
    Validation(String),

    /// Evaluating the template failed (undefined name, type error, ...).
    #[error("Error rendering template: {0}")]
    Render(String),
}

impl CheckError {
    /// Returns the field-less tag of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Data(_) => FailureKind::Data,
            CheckError::Syntax(_) => FailureKind::Syntax,
            CheckError::Validation(_) => FailureKind::Validation,
            CheckError::Render(_) => FailureKind::Render,
        }
    }

    /// Returns the detail without the stage prefix.
    pub fn detail(&self) -> &str {
        match self {
            CheckError::Data(msg)
            | CheckError::Syntax(msg)
            | CheckError::Validation(msg)
            | CheckError::Render(msg) => msg,
        }
    }

    /// Classifies a compile-time engine error.
    pub(crate) fn from_compile(err: &minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => CheckError::Syntax(describe(err)),
            _ => CheckError::Validation(describe(err)),
        }
    }

    /// Classifies an evaluation-time engine error.
    pub(crate) fn from_eval(err: &minijinja::Error) -> Self {
        CheckError::Render(describe(err))
    }
}

/// Which stage of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Data payload could not be parsed.
    Data,
    /// Template syntax is invalid.
    Syntax,
    /// Template could not be compiled for a non-syntax reason.
    Validation,
    /// Template syntax is valid but evaluation failed.
    Render,
}

impl FailureKind {
    /// Returns true if the template itself was rejected before rendering.
    pub fn is_template_rejected(&self) -> bool {
        matches!(self, FailureKind::Syntax | FailureKind::Validation)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Data => write!(f, "data"),
            FailureKind::Syntax => write!(f, "syntax"),
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::Render => write!(f, "render"),
        }
    }
}

/// Formats an engine error as `detail (line N)`.
///
/// The engine's own `Display` repeats the kind ("syntax error: ...") and the
/// template name, both of which the stage prefix already covers.
fn describe(err: &minijinja::Error) -> String {
    let detail = match err.detail() {
        Some(detail) => detail.to_string(),
        None => err.kind().to_string(),
    };
    match err.line() {
        Some(line) => format!("{} (line {})", detail, line),
        None => detail,
    }
}
