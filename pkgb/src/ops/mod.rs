//! Core operations.
//!
//! This module contains the business logic for pkgb commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod scan;

pub use build::build;
pub use scan::scan;
