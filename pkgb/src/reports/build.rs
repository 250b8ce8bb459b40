//! Build command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Scanned root directory.
    pub root: PathBuf,
    /// Number of source files discovered.
    pub file_count: usize,
    /// Number of (directory, namespace) holders.
    pub holder_count: usize,
    /// Number of type declarations found.
    pub class_count: usize,
    /// Written packages or dry-run preview.
    pub result: BuildResult,
}

/// Result of writing package files.
#[derive(Debug)]
pub enum BuildResult {
    /// Package files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when package files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Written packages, sorted by namespace.
    pub packages: Vec<PackageEntry>,
    /// Skip notices in the order they were emitted.
    pub notices: Vec<String>,
}

/// A written package file.
#[derive(Debug)]
pub struct PackageEntry {
    pub namespace: String,
    pub path: PathBuf,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Manifests that would be written.
    pub files: Vec<PreviewFile>,
}

/// A manifest in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            BuildResult::Written(written) => self.render_written(out, written),
            BuildResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BuildReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for notice in &written.notices {
            out.notice(notice);
        }
        if !written.notices.is_empty() {
            out.newline();
        }

        out.key_value("Scanned", &self.root.display().to_string());
        out.key_value(
            "Found",
            &format!(
                "{} types in {} files ({} namespaces)",
                self.class_count, self.file_count, self.holder_count
            ),
        );

        if written.packages.is_empty() {
            out.newline();
            out.preformatted("No package files written.");
            return;
        }

        out.newline();
        out.section(&format!("Packages ({})", written.packages.len()));
        for package in &written.packages {
            out.added_item(&format!("{} => {}", package.namespace, package.path.display()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} package files would be generated",
            preview.files.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: BuildResult) -> BuildReport {
        BuildReport {
            root: PathBuf::from("/src"),
            file_count: 3,
            holder_count: 2,
            class_count: 3,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(BuildResult::Written(WrittenResult {
            packages: vec![
                PackageEntry {
                    namespace: "demo".to_string(),
                    path: PathBuf::from("/src/package.php"),
                },
                PackageEntry {
                    namespace: "demo\\sub".to_string(),
                    path: PathBuf::from("/src/sub/package.php"),
                },
            ],
            notices: vec![],
        }));
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Scanned: /src",
                "Found: 3 types in 3 files (2 namespaces)",
                "",
                "Packages (2):",
                "  + demo => /src/package.php",
                "  + demo\\sub => /src/sub/package.php",
            ]
        );
    }

    #[test]
    fn test_render_notices_first() {
        let report = report(BuildResult::Written(WrittenResult {
            packages: vec![],
            notices: vec!["skipped one".to_string()],
        }));
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines[0], "skipped one");
        assert_eq!(out.lines.last().unwrap(), "No package files written.");
    }

    #[test]
    fn test_render_preview() {
        let report = report(BuildResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "/src/package.php".to_string(),
                content: "<?php".to_string(),
            }],
        }));
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── /src/package.php ──",
                "<?php",
                "── Summary ──",
                "1 package files would be generated",
            ]
        );
    }
}
