//! Scan operation - discovery and grouping without writing.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use packagebuilder_core::{ClassHolderContainer, display_namespace};
use packagebuilder_finder::{FileFinder, sort_class_files};

use crate::reports::{HolderInfo, ScanReport};

/// Options for the scan operation.
pub struct ScanOptions<'a> {
    /// Directory to scan.
    pub root: &'a Path,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Source file extension without dot.
    pub extension: &'a str,
}

/// Find source files under `root` and group them into holders.
pub(crate) fn discover(
    root: &Path,
    recursive: bool,
    extension: &str,
) -> Result<(Vec<PathBuf>, ClassHolderContainer)> {
    let files = FileFinder::new(extension)
        .find_files(root, recursive)
        .wrap_err("Failed to discover source files")?;
    let container = sort_class_files(&files).wrap_err("Failed to read source files")?;
    Ok((files, container))
}

/// Execute the scan operation.
pub fn scan(opts: ScanOptions) -> Result<ScanReport> {
    let (files, container) = discover(opts.root, opts.recursive, opts.extension)?;

    let holders = container
        .iter()
        .map(|holder| HolderInfo {
            namespace: display_namespace(holder.namespace()).to_string(),
            path: holder.path().to_path_buf(),
            classes: holder
                .classes()
                .iter()
                .map(|(name, file)| (name.clone(), file.clone()))
                .collect(),
        })
        .collect();

    Ok(ScanReport {
        root: opts.root.to_path_buf(),
        file_count: files.len(),
        holders,
    })
}
