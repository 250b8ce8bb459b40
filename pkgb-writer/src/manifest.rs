//! Package manifest rendering.

use std::path::{Path, PathBuf};

use packagebuilder_core::{ClassHolder, GeneratedFile};

use crate::{CodeBuilder, WriterOptions};

/// Base name of every manifest file.
const MANIFEST_STEM: &str = "package";

/// The manifest path for a holder directory: `<dir>/package.<ext>`.
pub fn manifest_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{MANIFEST_STEM}.{extension}"))
}

/// Quote `value` as a single-quoted string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// The manifest generated for one [`ClassHolder`].
///
/// Content is a pure function of the holder and options, entries follow the
/// holder's insertion order.
pub struct PackageManifest<'a> {
    holder: &'a ClassHolder,
    options: &'a WriterOptions,
}

impl<'a> PackageManifest<'a> {
    pub fn new(holder: &'a ClassHolder, options: &'a WriterOptions) -> Self {
        Self { holder, options }
    }
}

impl GeneratedFile for PackageManifest<'_> {
    fn path(&self) -> PathBuf {
        manifest_path(self.holder.path(), &self.options.extension)
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::default()
            .line("<?php")
            .line("declare(strict_types = 1);")
            .blank();

        if let Some(namespace) = self.holder.namespace() {
            code = code.line(&format!("namespace {namespace};")).blank();
        }
        if let Some(comment) = self.options.timestamp_comment() {
            code = code.line(&comment);
        }

        code.block_with_close("return [", "];", |b| {
            b.each(self.holder.classes(), |b, (name, file)| {
                b.line(&format!(
                    "{} => {},",
                    quote(name),
                    quote(&file.to_string_lossy())
                ))
            })
        })
        .build()
    }
}
