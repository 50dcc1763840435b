use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the full text of a source file.
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Overwrite a source file with rewritten content.
///
/// Writes in place with no backup of the original. The target is expected
/// to exist already, so no parent directories are created.
pub fn write_source(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(IoError::Io)
}

/// Check that `path` names an existing regular file.
pub fn validate_source_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    Ok(())
}
