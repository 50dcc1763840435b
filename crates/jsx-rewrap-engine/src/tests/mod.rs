use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory standing in for a test-suite checkout
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a source file with content inside the temporary directory
pub fn create_test_source(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
