//! Parameters-file input sources.
//!
//! All file access lives here; the decoder itself is pure and consumes a
//! complete in-memory buffer (the format is not streamed).

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is not a file: {path}")]
    NotAFile { path: String },
}

/// Read a complete parameters file into memory.
pub fn read_params_file(path: &Path) -> Result<Vec<u8>, SourceError> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(SourceError::NotAFile {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{SourceError, read_params_file};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("paramdump_{name}_{unique}"))
    }

    #[test]
    fn read_params_file_returns_bytes() {
        let path = temp_path("read");
        fs::write(&path, [0xFF, 0xFF, 0x00]).unwrap();
        let bytes = read_params_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn read_params_file_missing_is_io_error() {
        let path = temp_path("missing");
        let err = read_params_file(&path).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn read_params_file_rejects_directory() {
        let err = read_params_file(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, SourceError::NotAFile { .. }));
    }
}
