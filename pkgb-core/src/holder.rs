//! Per-namespace groupings of discovered types.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, map::Entry};

/// The types discovered for one namespace in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHolder {
    path: PathBuf,
    namespace: Option<String>,
    /// Type name -> declaring file, in first-seen order.
    classes: IndexMap<String, PathBuf>,
}

impl ClassHolder {
    /// Create an empty holder for `namespace` inside directory `path`.
    pub fn new(path: impl Into<PathBuf>, namespace: Option<String>) -> Self {
        Self {
            path: path.into(),
            namespace,
            classes: IndexMap::new(),
        }
    }

    /// Directory the holder's manifest belongs to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared namespace, `None` for the global namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Type name -> file path, in insertion order.
    pub fn classes(&self) -> &IndexMap<String, PathBuf> {
        &self.classes
    }

    /// Record a type declared in `file`.
    ///
    /// A name that is already present keeps its position and takes the new path.
    pub fn add_class(&mut self, name: impl Into<String>, file: impl Into<PathBuf>) {
        self.classes.insert(name.into(), file.into());
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The key this holder is stored under in a [`ClassHolderContainer`].
    pub fn key(&self) -> HolderKey {
        HolderKey {
            path: self.path.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

/// Grouping key: containing directory plus declared namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolderKey {
    pub path: PathBuf,
    pub namespace: Option<String>,
}

/// Ordered collection of holders, one per (directory, namespace) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHolderContainer {
    holders: IndexMap<HolderKey, ClassHolder>,
}

impl ClassHolderContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the holder for `(path, namespace)`, creating it on first sight.
    pub fn holder_mut(
        &mut self,
        path: impl Into<PathBuf>,
        namespace: Option<String>,
    ) -> &mut ClassHolder {
        let key = HolderKey {
            path: path.into(),
            namespace,
        };
        match self.holders.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let key = entry.key();
                let holder = ClassHolder::new(key.path.clone(), key.namespace.clone());
                entry.insert(holder)
            }
        }
    }

    /// Insert a complete holder, replacing any holder with the same key.
    pub fn insert(&mut self, holder: ClassHolder) {
        self.holders.insert(holder.key(), holder);
    }

    pub fn get(&self, path: &Path, namespace: Option<&str>) -> Option<&ClassHolder> {
        self.holders.get(&HolderKey {
            path: path.to_path_buf(),
            namespace: namespace.map(str::to_string),
        })
    }

    /// Holders in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassHolder> {
        self.holders.values()
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Total number of types across all holders.
    pub fn class_count(&self) -> usize {
        self.holders.values().map(ClassHolder::len).sum()
    }
}

impl<'a> IntoIterator for &'a ClassHolderContainer {
    type Item = &'a ClassHolder;
    type IntoIter = indexmap::map::Values<'a, HolderKey, ClassHolder>;

    fn into_iter(self) -> Self::IntoIter {
        self.holders.values()
    }
}
