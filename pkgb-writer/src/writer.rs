//! Package file writer.

use std::path::PathBuf;

use packagebuilder_core::{
    ClassHolder, ClassHolderContainer, Error, GeneratedFile, PackageContainer, Result,
    WriteResult,
};

use crate::{Notice, PackageManifest, Reporter, StdoutReporter, WriterOptions};

/// A manifest recorded instead of written in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunEntry {
    /// Path the manifest would be written to.
    pub path: PathBuf,
    /// Rendered manifest content.
    pub content: String,
}

/// Terminal state of writing one holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The holder had no classes; nothing to write.
    SkippedEmpty,
    /// The manifest already existed and overwriting is disabled.
    SkippedExisting(PathBuf),
    /// Dry-run: content recorded, filesystem untouched.
    DryRun(PathBuf),
    /// The manifest was written.
    Written(PathBuf),
}

impl WriteOutcome {
    /// The manifest path produced by this outcome, if any.
    pub fn into_package_path(self) -> Option<PathBuf> {
        match self {
            Self::DryRun(path) | Self::Written(path) => Some(path),
            Self::SkippedEmpty | Self::SkippedExisting(_) => None,
        }
    }
}

/// Writes one package manifest per non-empty [`ClassHolder`].
///
/// Each writer owns its dry-run log. Skip notices go to the reporter, which
/// defaults to standard output.
///
/// # Example
///
/// ```
/// use packagebuilder_core::ClassHolder;
/// use packagebuilder_writer::{NoticeLog, PackageWriter, WriterOptions};
///
/// let mut holder = ClassHolder::new("/src/demo", Some("demo".to_string()));
/// holder.add_class("Foo", "/src/demo/Foo.php");
///
/// let mut writer = PackageWriter::with_reporter(WriterOptions::new(true, true), NoticeLog::new());
/// let path = writer.write_package_file(&holder).unwrap();
///
/// assert_eq!(path.unwrap().to_str(), Some("/src/demo/package.php"));
/// assert_eq!(writer.dry_run_result().len(), 1);
/// ```
#[derive(Debug)]
pub struct PackageWriter<R = StdoutReporter> {
    options: WriterOptions,
    reporter: R,
    dry_run_result: Vec<DryRunEntry>,
}

impl PackageWriter<StdoutReporter> {
    /// Create a writer that prints notices to standard output.
    pub fn new(options: WriterOptions) -> Self {
        Self::with_reporter(options, StdoutReporter)
    }
}

impl<R: Reporter> PackageWriter<R> {
    pub fn with_reporter(options: WriterOptions, reporter: R) -> Self {
        Self {
            options,
            reporter,
            dry_run_result: Vec::new(),
        }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Manifests recorded in dry-run mode, in the order they were produced.
    pub fn dry_run_result(&self) -> &[DryRunEntry] {
        &self.dry_run_result
    }

    /// Write the manifest for `holder` and report how it ended.
    pub fn write_holder(&mut self, holder: &ClassHolder) -> Result<WriteOutcome> {
        if holder.is_empty() {
            return Ok(WriteOutcome::SkippedEmpty);
        }

        if let Some(file) = holder.classes().values().find(|file| file.to_str().is_none()) {
            return Err(Error::non_utf8_path(file));
        }

        let manifest = PackageManifest::new(holder, &self.options);
        let path = manifest.path();

        if self.options.dry_run {
            self.dry_run_result.push(DryRunEntry {
                path: path.clone(),
                content: manifest.render(),
            });
            return Ok(WriteOutcome::DryRun(path));
        }

        match manifest.write(self.options.overwrite)? {
            WriteResult::Written => Ok(WriteOutcome::Written(path)),
            WriteResult::Skipped => {
                self.reporter.notice(Notice::SkippedExisting { path: path.clone() });
                Ok(WriteOutcome::SkippedExisting(path))
            }
        }
    }

    /// Write the manifest for `holder`.
    ///
    /// Returns the manifest path, or `None` when the holder is empty or an
    /// existing manifest was kept.
    pub fn write_package_file(&mut self, holder: &ClassHolder) -> Result<Option<PathBuf>> {
        Ok(self.write_holder(holder)?.into_package_path())
    }

    /// Write a manifest for every holder in `container`.
    ///
    /// Clears the previous dry-run log. Holders that produce no manifest are
    /// left out of the result; only a failed write aborts the batch.
    pub fn write_package_files(
        &mut self,
        container: &ClassHolderContainer,
    ) -> Result<PackageContainer> {
        self.dry_run_result.clear();

        let mut packages = PackageContainer::new();
        for holder in container {
            if let Some(path) = self.write_package_file(holder)? {
                packages.add_package_file(holder.namespace().map(str::to_string), path);
            }
        }

        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;
    use crate::NoticeLog;

    fn holder_in(dir: &Path, namespace: &str, classes: &[&str]) -> ClassHolder {
        let mut holder = ClassHolder::new(dir, Some(namespace.to_string()));
        for class in classes {
            holder.add_class(*class, dir.join(format!("{class}.php")));
        }
        holder
    }

    fn new_writer(dry_run: bool, overwrite_existing: bool) -> PackageWriter<NoticeLog> {
        PackageWriter::with_reporter(
            WriterOptions::new(dry_run, overwrite_existing),
            NoticeLog::new(),
        )
    }

    #[test]
    fn test_empty_holder_yields_none() {
        let temp = TempDir::new().unwrap();
        let holder = ClassHolder::new(temp.path(), Some("demo".to_string()));

        for dry_run in [true, false] {
            let mut writer = new_writer(dry_run, true);
            assert_eq!(writer.write_holder(&holder).unwrap(), WriteOutcome::SkippedEmpty);
            assert_eq!(writer.write_package_file(&holder).unwrap(), None);
            assert!(writer.dry_run_result().is_empty());
        }
        assert!(!temp.path().join("package.php").exists());
    }

    #[test]
    fn test_real_run_writes_manifest() {
        let temp = TempDir::new().unwrap();
        let holder = holder_in(temp.path(), "demo", &["A"]);
        let mut writer = new_writer(false, true);

        let path = writer.write_package_file(&holder).unwrap().unwrap();

        assert_eq!(path, temp.path().join("package.php"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("namespace demo;"));
        assert!(content.contains("'A' =>"));
        assert!(writer.dry_run_result().is_empty());
    }

    #[test]
    fn test_dry_run_matches_real_run_and_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let holder = holder_in(temp.path(), "demo", &["A", "B"]);

        let mut dry = new_writer(true, true);
        let dry_path = dry.write_package_file(&holder).unwrap().unwrap();
        let again = dry.write_package_file(&holder).unwrap().unwrap();
        assert_eq!(dry_path, again);
        assert!(!dry_path.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);

        let mut real = new_writer(false, true);
        let real_path = real.write_package_file(&holder).unwrap().unwrap();

        assert_eq!(dry_path, real_path);
        let entries = dry.dry_run_result();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, real_path);
        assert_eq!(entries[0].content, fs::read_to_string(&real_path).unwrap());
    }

    #[test]
    fn test_existing_manifest_kept_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");
        fs::write(&path, "user content").unwrap();
        let holder = holder_in(temp.path(), "demo", &["A"]);
        let mut writer = new_writer(false, false);

        let outcome = writer.write_holder(&holder).unwrap();

        assert_eq!(outcome, WriteOutcome::SkippedExisting(path.clone()));
        assert_eq!(outcome.clone().into_package_path(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user content");
        assert_eq!(
            writer.reporter().notices(),
            &[Notice::SkippedExisting { path }]
        );
    }

    #[test]
    fn test_existing_manifest_replaced_with_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");
        fs::write(&path, "stale").unwrap();
        let holder = holder_in(temp.path(), "demo", &["A"]);
        let mut writer = new_writer(false, true);

        assert_eq!(
            writer.write_package_file(&holder).unwrap(),
            Some(path.clone())
        );
        assert_ne!(fs::read_to_string(&path).unwrap(), "stale");
        assert!(writer.reporter().is_empty());
    }

    #[test]
    fn test_dry_run_ignores_existing_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.php");
        fs::write(&path, "user content").unwrap();
        let holder = holder_in(temp.path(), "demo", &["A"]);
        let mut writer = new_writer(true, false);

        assert_eq!(
            writer.write_holder(&holder).unwrap(),
            WriteOutcome::DryRun(path.clone())
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "user content");
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing_dir = temp.path().join("gone");
        let holder = holder_in(&missing_dir, "demo", &["A"]);
        let mut writer = new_writer(false, true);

        let err = writer.write_package_file(&holder).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
        assert_eq!(err.path(), missing_dir.join("package.php"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_class_path_is_rejected() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        let bad = temp.path().join(OsStr::from_bytes(b"Caf\xe9.php"));
        let mut holder = ClassHolder::new(temp.path(), Some("demo".to_string()));
        holder.add_class("Cafe", &bad);

        for dry_run in [true, false] {
            let mut writer = new_writer(dry_run, true);
            let err = writer.write_package_file(&holder).unwrap_err();

            assert!(matches!(*err, Error::NonUtf8Path { .. }));
            assert_eq!(err.path(), bad);
            assert!(writer.dry_run_result().is_empty());
        }
        assert!(!temp.path().join("package.php").exists());
    }

    #[test]
    fn test_write_package_files_resets_dry_run_log() {
        let temp = TempDir::new().unwrap();
        let mut container = ClassHolderContainer::new();
        container.insert(holder_in(temp.path(), "demo", &["A"]));
        let mut writer = new_writer(true, true);

        writer.write_package_files(&container).unwrap();
        writer.write_package_files(&container).unwrap();

        assert_eq!(writer.dry_run_result().len(), 1);
    }

    #[test]
    fn test_skipped_holder_not_in_container() {
        let temp = TempDir::new().unwrap();
        let kept = temp.path().join("kept");
        let fresh = temp.path().join("fresh");
        fs::create_dir_all(&kept).unwrap();
        fs::create_dir_all(&fresh).unwrap();
        fs::write(kept.join("package.php"), "keep me").unwrap();

        let mut container = ClassHolderContainer::new();
        container.insert(holder_in(&kept, "app\\kept", &["K"]));
        container.insert(ClassHolder::new(temp.path(), Some("app\\empty".to_string())));
        container.insert(holder_in(&fresh, "app\\fresh", &["F"]));
        let mut writer = new_writer(false, false);

        let packages = writer.write_package_files(&container).unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages.get(Some("app\\kept")), None);
        assert_eq!(
            packages.get(Some("app\\fresh")),
            Some(fresh.join("package.php").as_path())
        );
        assert_eq!(writer.reporter().notices().len(), 1);
    }
}
