use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pipeline operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("scan root '{path}' does not exist or is not a directory")]
    #[diagnostic(
        code(packagebuilder::not_found),
        help("pass an existing directory as the scan root")
    )]
    NotFound { path: PathBuf },

    #[error("failed to traverse '{path}'")]
    #[diagnostic(code(packagebuilder::traverse))]
    Traverse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source file '{path}'")]
    #[diagnostic(code(packagebuilder::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open '{path}' for writing")]
    #[diagnostic(code(packagebuilder::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source path '{path}' is not valid UTF-8")]
    #[diagnostic(
        code(packagebuilder::non_utf8_path),
        help("rename the file so its path can be written into the package manifest")
    )]
    NonUtf8Path { path: PathBuf },
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Self::NotFound { path: path.into() })
    }

    pub fn traverse(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Traverse {
            path: path.into(),
            source,
        })
    }

    pub fn parse(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Parse {
            path: path.into(),
            source,
        })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }

    pub fn non_utf8_path(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Self::NonUtf8Path { path: path.into() })
    }

    /// The path the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Traverse { path, .. }
            | Self::Parse { path, .. }
            | Self::Io { path, .. }
            | Self::NonUtf8Path { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = Error::not_found("/missing/dir");
        assert_eq!(
            err.to_string(),
            "scan root '/missing/dir' does not exist or is not a directory"
        );

        let err = Error::io(
            "/ro/package.php",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "could not open '/ro/package.php' for writing");
        assert_eq!(err.path(), Path::new("/ro/package.php"));
    }

    #[test]
    fn test_non_utf8_path_message() {
        let err = Error::non_utf8_path("/src/Cafe.php");
        assert_eq!(
            err.to_string(),
            "source path '/src/Cafe.php' is not valid UTF-8"
        );
        assert_eq!(err.path(), Path::new("/src/Cafe.php"));
    }
}
