//! File allow-lists and the payload size cap.
//!
//! | Payload | Allowed extensions |
//! |---------|--------------------|
//! | Template | `.j2`, `.jinja`, `.jinja2`, `.html`, `.txt` |
//! | Data | `.json`, `.yaml`, `.yml`, `.csv` |
//!
//! Extensions are compared case-insensitively. A file with no extension (or a
//! dotfile such as `.json`) is never allowed.

use std::fmt;
use std::path::Path;

use crate::InputError;

/// Recognized template file extensions.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".j2", ".jinja", ".jinja2", ".html", ".txt"];

/// Recognized data file extensions.
pub const DATA_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml", ".csv"];

/// Default payload cap: 5 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 5 * 1024 * 1024;

/// Which half of a check request a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Template,
    Data,
}

impl PayloadKind {
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            PayloadKind::Template => TEMPLATE_EXTENSIONS,
            PayloadKind::Data => DATA_EXTENSIONS,
        }
    }

    /// Returns true if `path` carries one of this payload's extensions.
    pub fn allows(&self, path: &Path) -> bool {
        extension_of(path)
            .map(|ext| self.allowed_extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// Fails with [`InputError::DisallowedExtension`] unless `path` is allowed.
    pub fn check_path(&self, path: &Path) -> Result<(), InputError> {
        if path.as_os_str().is_empty() {
            return Err(InputError::EmptyPath);
        }
        if self.allows(path) {
            Ok(())
        } else {
            Err(InputError::DisallowedExtension {
                path: path.to_path_buf(),
                kind: *self,
            })
        }
    }

    /// Fails with [`InputError::TooLarge`] when `size` exceeds `limit`.
    pub fn check_size(&self, size: u64, limit: u64) -> Result<(), InputError> {
        if size > limit {
            Err(InputError::TooLarge {
                kind: *self,
                size,
                limit,
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Template => write!(f, "template"),
            PayloadKind::Data => write!(f, "data"),
        }
    }
}

/// How a data file is decoded when it is loaded on its own.
///
/// Unlike inline data, a data file is decoded strictly by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFileKind {
    Json,
    Yaml,
    Csv,
}

impl DataFileKind {
    /// Classifies a data file by extension.
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        PayloadKind::Data.check_path(path)?;
        match extension_of(path).as_deref() {
            Some(".json") => Ok(DataFileKind::Json),
            Some(".yaml") | Some(".yml") => Ok(DataFileKind::Yaml),
            Some(".csv") => Ok(DataFileKind::Csv),
            _ => Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// The lowercased extension of `path`, including the leading dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}
