//! Emission stage of the packagebuilder pipeline.
//!
//! - [`PackageWriter`] - writes (or records, in dry-run mode) one manifest per holder
//! - [`PackageManifest`] - renders the manifest content for a holder
//! - [`Reporter`] - receives skip notices emitted while writing
//! - [`CodeBuilder`] - indentation-aware line builder used for rendering

mod builder;
mod manifest;
mod options;
mod reporter;
mod writer;

pub use builder::CodeBuilder;
pub use manifest::{PackageManifest, manifest_path};
pub use options::WriterOptions;
pub use reporter::{Notice, NoticeLog, Reporter, StdoutReporter};
pub use writer::{DryRunEntry, PackageWriter, WriteOutcome};
