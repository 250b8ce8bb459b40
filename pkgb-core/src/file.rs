use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Content derived from pipeline data and destined for one path on disk
pub trait GeneratedFile {
    /// Target path
    fn path(&self) -> PathBuf;

    /// Full file content; must not depend on what is already on disk
    fn render(&self) -> String;

    /// Render and store the content, honouring `overwrite`
    fn write(&self, overwrite: Overwrite) -> Result<WriteResult> {
        File::new(self.path(), self.render()).write(overwrite)
    }
}

/// Opens `path` for writing, truncating it, and writes `content`.
///
/// The handle is dropped (and closed) on every exit path.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes()).map_err(|e| Error::io(path, e))
}

/// Whether a write touched the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Content was stored
    Written,
    /// Target existed and the policy kept it
    Skipped,
}

/// Rendered content paired with its target path
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Store the content, or leave an existing file alone under `IfMissing`
    pub fn write(&self, overwrite: Overwrite) -> Result<WriteResult> {
        if overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Policy for a target path that already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Truncate and replace
    #[default]
    Always,
    /// Keep the existing file
    IfMissing,
}

impl Overwrite {
    /// Map an `overwrite existing` flag to a policy.
    pub fn from_flag(overwrite_existing: bool) -> Self {
        if overwrite_existing {
            Self::Always
        } else {
            Self::IfMissing
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_missing_parent_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent").join("package.php");

        let err = write_file(&path, "nested").unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write(Overwrite::Always).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");

        let file = File::new(&path, "new content");
        let result = file.write(Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write");
        let result = file.write(Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_overwrite_from_flag() {
        assert_eq!(Overwrite::from_flag(true), Overwrite::Always);
        assert_eq!(Overwrite::from_flag(false), Overwrite::IfMissing);
    }
}
