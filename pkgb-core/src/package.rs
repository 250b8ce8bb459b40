//! Manifest files written by a run, keyed by namespace.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Label used when showing the global (undeclared) namespace.
pub const GLOBAL_NAMESPACE: &str = "\\";

/// Render a namespace for display, using [`GLOBAL_NAMESPACE`] for `None`.
pub fn display_namespace(namespace: Option<&str>) -> &str {
    namespace.unwrap_or(GLOBAL_NAMESPACE)
}

/// Namespace -> manifest path for every package file produced by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageContainer {
    packages: IndexMap<Option<String>, PathBuf>,
}

impl PackageContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the manifest written for `namespace`.
    ///
    /// A namespace seen twice keeps its position and takes the later path.
    pub fn add_package_file(&mut self, namespace: Option<String>, path: impl Into<PathBuf>) {
        self.packages.insert(namespace, path.into());
    }

    pub fn get(&self, namespace: Option<&str>) -> Option<&Path> {
        self.packages
            .get(&namespace.map(str::to_string))
            .map(PathBuf::as_path)
    }

    /// Sort entries by namespace; the global namespace sorts first.
    pub fn sort_packages(&mut self) -> &mut Self {
        self.packages.sort_keys();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Path)> {
        self.packages
            .iter()
            .map(|(ns, path)| (ns.as_deref(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
