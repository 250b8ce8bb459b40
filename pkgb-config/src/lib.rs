//! Configuration file support for packagebuilder.
//!
//! Settings live in an optional `packagebuilder.toml`:
//!
//! ```toml
//! [scan]
//! root = "src"
//! recursive = true
//! extension = "php"
//!
//! [writer]
//! dry_run = false
//! overwrite = true
//! timestamp = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Config, ScanConfig, WriterConfig, extension_problem};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
