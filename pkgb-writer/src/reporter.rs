//! Side channel for notices emitted while writing.

use std::{fmt, path::PathBuf};

/// A non-fatal event worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An existing package file was kept because overwriting is disabled.
    SkippedExisting { path: PathBuf },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SkippedExisting { path } => write!(
                f,
                "Package file {} already exists and will not be overwritten. Skipping...",
                path.display()
            ),
        }
    }
}

/// Receives notices from a [`PackageWriter`](crate::PackageWriter).
pub trait Reporter {
    fn notice(&mut self, notice: Notice);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn notice(&mut self, notice: Notice) {
        (**self).notice(notice);
    }
}

/// Prints notices to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn notice(&mut self, notice: Notice) {
        println!("{}", notice);
    }
}

/// Keeps notices in memory, in the order they were emitted.
#[derive(Debug, Default, Clone)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Reporter for NoticeLog {
    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
