//! Error types for registry operations.

use crate::record::RecordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file does not exist: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("unknown shim: {0}")]
    UnknownShim(String),

    #[error("not found: {}", .0.display())]
    MissingArtifact(PathBuf),

    #[error("invalid shim name '{0}': {1}")]
    InvalidName(String, &'static str),

    #[error("failed to resolve '{}': {source}", .path.display())]
    Resolve { path: PathBuf, source: io::Error },

    #[error("failed to list registry directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to remove '{}': {source}", .path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("stub executable unavailable at '{}': {source}", .path.display())]
    StubUnavailable {
        path: PathBuf,
        source: shimkit_fs::Error,
    },

    #[error("cannot record shim '{name}': {source}")]
    InvalidRecord { name: String, source: RecordError },

    #[error("malformed data record '{}': {source}", .path.display())]
    MalformedRecord { path: PathBuf, source: RecordError },

    #[error(transparent)]
    Fs(#[from] shimkit_fs::Error),
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A target, shim, or artifact is missing where one is required.
    NotFound,
    /// The shim name cannot be used as a file stem.
    InvalidName,
    /// The target path or fixed arguments cannot be stored in a data record.
    InvalidRecord,
    /// The filesystem refused a read, write, listing, or deletion.
    IoFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetNotFound(_) | Self::UnknownShim(_) | Self::MissingArtifact(_) => {
                ErrorKind::NotFound
            }
            Self::InvalidName(..) => ErrorKind::InvalidName,
            Self::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            Self::Resolve { .. }
            | Self::ReadDir { .. }
            | Self::Remove { .. }
            | Self::StubUnavailable { .. }
            | Self::MalformedRecord { .. }
            | Self::Fs(_) => ErrorKind::IoFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_subject() {
        assert_eq!(
            Error::UnknownShim("build".into()).to_string(),
            "unknown shim: build"
        );
        assert_eq!(
            Error::MissingArtifact(PathBuf::from("/shims/build.shim")).to_string(),
            "not found: /shims/build.shim"
        );
        assert_eq!(
            Error::TargetNotFound(PathBuf::from("/tools/make")).to_string(),
            "file does not exist: /tools/make"
        );
    }

    #[test]
    fn test_kinds() {
        assert!(Error::UnknownShim("x".into()).is_not_found());
        assert!(Error::MissingArtifact(PathBuf::new()).is_not_found());
        assert!(Error::TargetNotFound(PathBuf::new()).is_not_found());
        assert_eq!(
            Error::InvalidName("a/b".into(), "contains a path separator").kind(),
            ErrorKind::InvalidName
        );

        let record = Error::InvalidRecord {
            name: "x".into(),
            source: RecordError::LineBreak("args"),
        };
        assert_eq!(record.kind(), ErrorKind::InvalidRecord);
        assert_eq!(
            record.to_string(),
            "cannot record shim 'x': args value contains a line break"
        );

        let io = Error::Remove {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(io.kind(), ErrorKind::IoFailure);

        let fs = Error::from(shimkit_fs::Error::NoParent(PathBuf::from("/")));
        assert_eq!(fs.kind(), ErrorKind::IoFailure);
    }
}
