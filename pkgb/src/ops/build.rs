//! Build operation - discover, group and write package manifests.

use std::path::Path;

use eyre::{Context, Result};
use packagebuilder_core::display_namespace;
use packagebuilder_writer::{NoticeLog, PackageWriter, WriterOptions};

use super::scan::discover;
use crate::reports::{
    BuildReport, BuildResult, PackageEntry, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the build operation.
pub struct BuildOptions<'a> {
    /// Directory to scan.
    pub root: &'a Path,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Writer settings; its extension also selects the source files.
    pub writer: WriterOptions,
}

/// Execute the build operation.
///
/// Skip notices are collected and handed to the report instead of being
/// printed while writing.
pub fn build(opts: BuildOptions) -> Result<BuildReport> {
    let (files, container) = discover(opts.root, opts.recursive, &opts.writer.extension)?;

    let dry_run = opts.writer.dry_run;
    let mut writer = PackageWriter::with_reporter(opts.writer, NoticeLog::new());
    let mut packages = writer
        .write_package_files(&container)
        .wrap_err("Failed to write package files")?;
    packages.sort_packages();

    let result = if dry_run {
        let files = writer
            .dry_run_result()
            .iter()
            .map(|entry| PreviewFile {
                path: entry.path.display().to_string(),
                content: entry.content.clone(),
            })
            .collect();
        BuildResult::Preview(PreviewResult { files })
    } else {
        BuildResult::Written(WrittenResult {
            packages: packages
                .iter()
                .map(|(namespace, path)| PackageEntry {
                    namespace: display_namespace(namespace).to_string(),
                    path: path.to_path_buf(),
                })
                .collect(),
            notices: writer
                .into_reporter()
                .into_notices()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    };

    Ok(BuildReport {
        root: opts.root.to_path_buf(),
        file_count: files.len(),
        holder_count: container.len(),
        class_count: container.class_count(),
        result,
    })
}
