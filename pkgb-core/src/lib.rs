//! Core types for the packagebuilder classmap generator.
//!
//! This crate holds the data flowing between the pipeline stages
//! (discovery, sorting, writing) and the error taxonomy they share.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod holder;
mod package;

pub use error::{Error, Result};
// File operations
pub use file::{File, GeneratedFile, Overwrite, WriteResult};
// Pipeline data
pub use holder::{ClassHolder, ClassHolderContainer, HolderKey};
pub use package::{GLOBAL_NAMESPACE, PackageContainer, display_namespace};
