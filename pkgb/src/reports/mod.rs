//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod build;
mod output;
mod scan;

pub use build::{
    BuildReport, BuildResult, PackageEntry, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Report, TerminalOutput};
pub use scan::{HolderInfo, ScanReport};
