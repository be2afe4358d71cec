use crate::permissions::PermissionMode;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Options for [`atomic_write`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Permissions set on the temp file before it replaces the destination.
    /// `None` behaves like [`PermissionMode::Inherit`].
    pub permissions: Option<PermissionMode>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissions(mut self, mode: PermissionMode) -> Self {
        self.permissions = Some(mode);
        self
    }
}

/// Write `content` to `path`, creating or replacing it.
///
/// The bytes go to a hidden `.tmp.<uuid>.shimkit` sibling first, which is
/// then renamed over `path`. Readers see either the old file or the new one.
/// The temp name never ends in a registry suffix, so a concurrent directory
/// listing cannot mistake it for a shim.
///
/// # Platform Behavior
/// - **Unix**: `rename(2)` replaces the destination atomically.
/// - **Windows**: `MoveFileExW` with replace semantics; atomic on NTFS for files.
///
/// # Errors
/// - [`Error::NoParent`] if `path` has no parent directory.
/// - [`Error::Write`] if staging, setting permissions, or the rename fails.
///   The temp file is removed on every failure, so nothing is left behind.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: Options) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .ok_or_else(|| Error::NoParent(path.to_path_buf()))?;

    let tmp_path = parent.join(format!(".tmp.{}.shimkit", uuid::Uuid::new_v4()));

    let result = stage_and_rename(&tmp_path, path, content, options);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn stage_and_rename(tmp_path: &Path, path: &Path, content: &[u8], options: Options) -> Result<()> {
    fs::write(tmp_path, content).map_err(|e| Error::Write {
        path: tmp_path.to_path_buf(),
        source: e,
    })?;

    if let Some(mode) = options.permissions {
        mode.apply_to_path(tmp_path)?;
    }

    fs::rename(tmp_path, path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the whole file at `path`.
///
/// # Errors
/// Returns [`Error::Read`] carrying the path and the IO error.
pub fn atomic_read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the whole file at `path` as UTF-8.
///
/// # Errors
/// Returns [`Error::Read`] if the file cannot be read or is not valid UTF-8.
pub fn atomic_read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<std::ffi::OsString> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        atomic_write(&path, b"hello world", Options::new()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello world");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.shim");
        atomic_write(&path, b"data", Options::new()).unwrap();

        assert_eq!(entries(dir.path()), vec![std::ffi::OsString::from("record.shim")]);
    }

    #[test]
    fn test_atomic_write_with_executable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stub");
        atomic_write(
            &path,
            b"\x7fELF",
            Options::new().permissions(PermissionMode::Executable),
        )
        .unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(&path).unwrap();
            assert_eq!(metadata.permissions().mode() & 0o777, 0o755);
        }
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("inner"), b"keep").unwrap();

        let err = atomic_write(&blocker, b"data", Options::new()).unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(entries(dir.path()), vec![std::ffi::OsString::from("occupied")]);
    }

    #[test]
    fn test_atomic_write_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("file");
        let err = atomic_write(&path, b"data", Options::new()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn test_atomic_read_missing() {
        let dir = tempdir().unwrap();
        let err = atomic_read(dir.path().join("nope")).unwrap_err();
        match err {
            Error::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
