//! Discovery and grouping stages of the packagebuilder pipeline.
//!
//! - [`FileFinder`] - walks a root directory for source files
//! - [`extract`] - lightweight textual scan for namespace and type declarations
//! - [`sort_class_files`] - groups files into per-namespace holders

pub mod extract;
mod finder;
mod sorter;

pub use extract::Declaration;
pub use finder::{DEFAULT_EXTENSION, FileFinder};
pub use sorter::sort_class_files;
