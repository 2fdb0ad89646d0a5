use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::Result;
use serde::Deserialize;

/// How generated content lands in an existing file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Append to the end of the file, creating it if missing
    #[default]
    Append,
    /// Replace the file content
    Overwrite,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// Content was appended to an existing file
    Appended,
    /// Existing file was replaced
    Overwritten,
}

/// A generated output file
pub struct OutputFile {
    path: PathBuf,
    content: String,
    mode: WriteMode,
}

impl OutputFile {
    /// Create a new output file (default mode: append)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            mode: WriteMode::default(),
        }
    }

    /// Set the write mode
    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its mode
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match self.mode {
            WriteMode::Append => {
                let mut file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(&self.path)?;
                file.write_all(self.content.as_bytes())?;
            }
            WriteMode::Overwrite => std::fs::write(&self.path, &self.content)?,
        }

        Ok(match (existed, self.mode) {
            (false, _) => WriteResult::Created,
            (true, WriteMode::Append) => WriteResult::Appended,
            (true, WriteMode::Overwrite) => WriteResult::Overwritten,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.go");

        let result = OutputFile::new(&path, "package models\n").write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package models\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("models.go");

        OutputFile::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.go");
        fs::write(&path, "first\n").unwrap();

        let result = OutputFile::new(&path, "second\n").write().unwrap();

        assert_eq!(result, WriteResult::Appended);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.go");
        fs::write(&path, "original").unwrap();

        let result = OutputFile::new(&path, "updated")
            .mode(WriteMode::Overwrite)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.go");

        let file = OutputFile::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
