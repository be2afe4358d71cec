use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading `path` failed.
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing, chmod-ing, or renaming into `path` failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The destination has no parent directory to stage the temp file in.
    #[error("path has no parent directory: '{}'", .0.display())]
    NoParent(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
