//! Error types for input collection.

use std::io;
use std::path::PathBuf;

use crate::limits::PayloadKind;

/// Errors raised at the input boundary, before any template work happens.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read from stdin.
    #[error("Failed to read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// Failed to read a file.
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An empty path was given.
    #[error("No file selected")]
    EmptyPath,

    /// The file extension is not on the allow-list for this payload.
    #[error(
        "Invalid file type for {kind} file {}: allowed extensions are {}",
        .path.display(),
        .kind.allowed_extensions().join(", ")
    )]
    DisallowedExtension { path: PathBuf, kind: PayloadKind },

    /// The payload exceeds the size cap.
    #[error("{kind} exceeds the {limit} byte limit (at least {size} bytes)")]
    TooLarge {
        kind: PayloadKind,
        size: u64,
        limit: u64,
    },

    /// The content is not valid UTF-8.
    #[error("Error reading file {}: content is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },

    /// The file is allowed but cannot be loaded as structured data.
    #[error("Unsupported file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A boolean flag was not `true`/`false` (or an accepted synonym).
    #[error("Invalid value '{value}' for {name}: expected true or false")]
    InvalidFlag { name: String, value: String },

    /// Both payloads asked for stdin.
    #[error("stdin can provide either the template or the data, not both")]
    StdinConflict,

    /// No source provided input and there is no default.
    #[error("No {0} provided")]
    NoInput(PayloadKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_extension_lists_allowed() {
        let err = InputError::DisallowedExtension {
            path: PathBuf::from("notes.md"),
            kind: PayloadKind::Template,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid file type for template file notes.md"));
        assert!(msg.contains(".j2, .jinja, .jinja2, .html, .txt"));
    }

    #[test]
    fn too_large_message() {
        let err = InputError::TooLarge {
            kind: PayloadKind::Data,
            size: 10,
            limit: 5,
        };
        assert_eq!(err.to_string(), "data exceeds the 5 byte limit (at least 10 bytes)");
    }
}
