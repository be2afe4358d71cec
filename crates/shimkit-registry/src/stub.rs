//! Stub provisioning.
//!
//! The stub is a pre-built executable copied verbatim for every shim. The
//! registry never inspects or modifies its bytes.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub trait StubProvisioner {
    fn provide_stub(&self) -> Result<Vec<u8>>;
}

impl<S: StubProvisioner + ?Sized> StubProvisioner for &S {
    fn provide_stub(&self) -> Result<Vec<u8>> {
        (**self).provide_stub()
    }
}

/// Reads the stub from a file on every request.
#[derive(Debug, Clone)]
pub struct FileStub {
    path: PathBuf,
}

impl FileStub {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StubProvisioner for FileStub {
    fn provide_stub(&self) -> Result<Vec<u8>> {
        shimkit_fs::atomic_read(&self.path).map_err(|source| Error::StubUnavailable {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed in-memory stub bytes.
#[derive(Debug, Clone, Default)]
pub struct BytesStub(Vec<u8>);

impl BytesStub {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl StubProvisioner for BytesStub {
    fn provide_stub(&self) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_bytes_stub() {
        let stub = BytesStub::new(*b"MZ\x90\x00");
        assert_eq!(stub.provide_stub().unwrap(), b"MZ\x90\x00");
    }

    #[test]
    fn test_file_stub_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shim.exe");
        std::fs::write(&path, [0u8, 1, 2, 255]).unwrap();

        let stub = FileStub::new(&path);
        assert_eq!(stub.path(), path);
        assert_eq!(stub.provide_stub().unwrap(), vec![0u8, 1, 2, 255]);
    }

    #[test]
    fn test_file_stub_missing() {
        let dir = tempfile::tempdir().unwrap();
        let stub = FileStub::new(dir.path().join("absent"));

        let err = stub.provide_stub().unwrap_err();
        assert!(matches!(err, Error::StubUnavailable { .. }));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_provisioner_by_reference() {
        fn provide<S: StubProvisioner>(s: S) -> Vec<u8> {
            s.provide_stub().unwrap()
        }
        let stub = BytesStub::new(vec![7u8]);
        assert_eq!(provide(&stub), vec![7u8]);
    }
}
