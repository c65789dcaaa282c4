//! File input source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::{InputCollector, InputSourceKind};
use crate::limits::{PayloadKind, DEFAULT_MAX_SIZE};
use crate::InputError;

/// Reads a payload from a file.
///
/// Before reading, the path is checked against the payload's extension
/// allow-list and the file size against the cap. Content must be UTF-8.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: Option<PathBuf>,
    kind: PayloadKind,
    max_size: u64,
}

impl FileSource {
    pub fn new(path: Option<PathBuf>, kind: PayloadKind) -> Self {
        Self {
            path,
            kind,
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Sets the size cap in bytes.
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl InputCollector for FileSource {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::File
    }

    fn is_available(&self) -> bool {
        self.path.is_some()
    }

    fn collect(&self) -> Result<Option<String>, InputError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        read_payload_file(path, self.kind, self.max_size).map(Some)
    }
}

/// Reads one payload file, enforcing the allow-list, the cap and UTF-8.
pub fn read_payload_file(
    path: &Path,
    kind: PayloadKind,
    max_size: u64,
) -> Result<String, InputError> {
    kind.check_path(path)?;

    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(io_err)?.len();
    kind.check_size(size, max_size)?;

    let bytes = fs::read(path).map_err(io_err)?;
    debug!(path = %path.display(), bytes = bytes.len(), %kind, "read payload file");
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_allowed_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "page.j2", b"{{ title }}\n");
        let source = FileSource::new(Some(path), PayloadKind::Template);
        assert!(source.is_available());
        assert_eq!(source.collect().unwrap(), Some("{{ title }}\n".to_string()));
    }

    #[test]
    fn rejects_wrong_extension_before_reading() {
        let source = FileSource::new(Some(PathBuf::from("/does/not/exist.md")), PayloadKind::Template);
        assert!(matches!(
            source.collect(),
            Err(InputError::DisallowedExtension { .. })
        ));
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "data.json", b"{\"a\": 1}");
        let source = FileSource::new(Some(path), PayloadKind::Data).max_size(4);
        assert!(matches!(
            source.collect(),
            Err(InputError::TooLarge { size: 8, limit: 4, .. })
        ));
    }

    #[test]
    fn rejects_non_utf8() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "data.yaml", &[0xff, 0xfe, 0x00]);
        let source = FileSource::new(Some(path), PayloadKind::Data);
        assert!(matches!(source.collect(), Err(InputError::NotUtf8 { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(Some(dir.path().join("gone.txt")), PayloadKind::Template);
        assert!(matches!(source.collect(), Err(InputError::Io { .. })));
    }

    #[test]
    fn unavailable_without_path() {
        let source = FileSource::new(None, PayloadKind::Data);
        assert!(!source.is_available());
        assert_eq!(source.collect().unwrap(), None);
    }
}
