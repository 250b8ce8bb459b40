//! Config schema, parsing and validation.

use std::{path::PathBuf, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root schema for packagebuilder.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Discovery settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Manifest emission settings
    #[serde(default)]
    pub writer: WriterConfig,
}

/// `[scan]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Source file extension without dot
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: false,
            extension: "php".to_string(),
        }
    }
}

/// `[writer]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Preview manifests without writing them
    pub dry_run: bool,
    /// Replace existing manifests
    pub overwrite: bool,
    /// Add an autogenerated-timestamp comment
    pub timestamp: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            overwrite: true,
            timestamp: false,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "packagebuilder.toml")
    }
}

impl Config {
    /// Parse config content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse config content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Why `extension` is not a usable source extension, if it is not.
///
/// Shared by `[scan].extension` and the `--extension` flag.
pub fn extension_problem(extension: &str) -> Option<&'static str> {
    if extension.is_empty() {
        Some("extension must not be empty")
    } else if extension.contains('.') {
        Some("extension must not contain a dot")
    } else if extension.contains(['/', '\\']) {
        Some("extension must not contain a path separator")
    } else {
        None
    }
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    match extension_problem(&config.scan.extension) {
        Some(message) => {
            let span = find_value_span(ctx.src(), "extension");
            Err(ctx.validation_error(message, span))
        }
        None => Ok(()),
    }
}

/// Locate the value of a `key = value` line in `src`.
fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let value = line
            .trim_start()
            .strip_prefix(key)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));

        if let Some(value) = value {
            // `value` is a suffix of `line`
            let lead = value.len() - value.trim_start().len();
            let start = offset + (line.len() - value.len()) + lead;
            return Some(SourceSpan::from((start, value.trim().len())));
        }
        offset += line.len();
    }
    None
}
