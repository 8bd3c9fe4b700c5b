//! File-based roster source.

use crate::model::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// A roster JSON file, read once.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Point at `path`. The file is not read yet.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire file.
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the file vanished since construction, `Io` otherwise.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InputError::FileNotFound {
                path: self.path.clone(),
            },
            _ => InputError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_existing_file() {
        let test_file = std::env::temp_dir().join("roster_file_new_existing.json");
        fs::write(&test_file, "[]").unwrap();

        let result = FileSource::new(&test_file);

        let _ = fs::remove_file(&test_file);

        assert_eq!(result.unwrap().path(), test_file.as_path());
    }

    #[test]
    fn new_returns_file_not_found_for_missing_file() {
        let missing = std::env::temp_dir().join("roster_file_missing_98765.json");
        assert!(matches!(
            FileSource::new(&missing),
            Err(InputError::FileNotFound { .. })
        ));
    }

    #[test]
    fn read_reports_file_removed_after_construction() {
        let test_file = std::env::temp_dir().join("roster_file_removed_later.json");
        fs::write(&test_file, "[]").unwrap();
        let source = FileSource::new(&test_file).unwrap();
        fs::remove_file(&test_file).unwrap();

        assert!(matches!(
            source.read_to_string(),
            Err(InputError::FileNotFound { .. })
        ));
    }

    #[test]
    fn read_returns_contents() {
        let test_file = std::env::temp_dir().join("roster_file_read_contents.json");
        fs::write(&test_file, "[1, 2]").unwrap();

        let contents = FileSource::new(&test_file).unwrap().read_to_string();

        let _ = fs::remove_file(&test_file);

        assert_eq!(contents.unwrap(), "[1, 2]");
    }
}
