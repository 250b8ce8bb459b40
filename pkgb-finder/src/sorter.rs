//! Grouping of source files into per-namespace holders.

use std::path::Path;

use packagebuilder_core::{ClassHolderContainer, Error, Result};

use crate::extract;

/// Read each file and group its declared type by (directory, namespace).
///
/// Files that declare no type are left out. Holders appear in the order their
/// first file was processed, and a type name declared twice in one holder maps
/// to the later file. Only an unreadable file is an error.
pub fn sort_class_files<I, P>(files: I) -> Result<ClassHolderContainer>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut container = ClassHolderContainer::new();

    for file in files {
        let file = file.as_ref();
        let bytes = std::fs::read(file).map_err(|e| Error::parse(file, e))?;
        let source = String::from_utf8_lossy(&bytes);

        let Some(decl) = extract::declaration(&source) else {
            continue;
        };

        let dir = file.parent().unwrap_or_else(|| Path::new(""));
        container.holder_mut(dir, decl.namespace).add_class(decl.name, file);
    }

    Ok(container)
}
