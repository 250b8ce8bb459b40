//! Source file discovery.

use std::path::{Path, PathBuf};

use packagebuilder_core::{Error, Result};
use walkdir::WalkDir;

/// Source extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "php";

/// Walks a root directory for files with the configured source extension.
#[derive(Debug, Clone)]
pub struct FileFinder {
    /// Extension without dot (e.g., "php")
    extension: String,
}

impl FileFinder {
    /// Create a finder for `extension`; a leading dot is ignored.
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Find source files under `root`.
    ///
    /// Without `recursive` only files directly inside `root` are returned.
    /// The root is canonicalized, so returned paths are absolute. Entries of a
    /// directory are visited in file-name order and directory symlinks are not
    /// followed.
    pub fn find_files(&self, root: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::not_found(root));
        }
        let root = root.canonicalize().map_err(|e| Error::traverse(root, e))?;

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| root.clone(), Path::to_path_buf);
                Error::traverse(path, e.into())
            })?;

            if entry.path().is_file() && self.is_source(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}
