//! Scan command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a scan.
#[derive(Debug)]
pub struct ScanReport {
    /// Scanned root directory.
    pub root: PathBuf,
    /// Number of source files discovered.
    pub file_count: usize,
    /// Holders in discovery order.
    pub holders: Vec<HolderInfo>,
}

/// One (directory, namespace) holder.
#[derive(Debug)]
pub struct HolderInfo {
    /// Namespace, `\` for the global namespace.
    pub namespace: String,
    /// Directory the manifest would be written to.
    pub path: PathBuf,
    /// Type name and file, in discovery order.
    pub classes: Vec<(String, PathBuf)>,
}

impl ScanReport {
    pub fn class_count(&self) -> usize {
        self.holders.iter().map(|h| h.classes.len()).sum()
    }
}

impl Report for ScanReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Scanned", &self.root.display().to_string());
        out.key_value("Files", &self.file_count.to_string());

        if self.holders.is_empty() {
            out.newline();
            out.preformatted("No type declarations found.");
            return;
        }

        for holder in &self.holders {
            out.newline();
            out.section(&format!("{} ({})", holder.namespace, holder.path.display()));
            for (name, file) in &holder.classes {
                out.list_item(&format!("{} => {}", name, file.display()));
            }
        }

        out.newline();
        out.key_value(
            "Total",
            &format!(
                "{} types in {} namespaces",
                self.class_count(),
                self.holders.len()
            ),
        );
    }
}
