use crate::{Error, Result};
use std::path::Path;

/// File permission modes applied to a freshly written file before it is
/// renamed into place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionMode {
    /// Use system default permissions.
    ///
    /// On Unix: Uses the process's umask
    /// On Windows: Uses Windows default permissions
    #[default]
    Inherit,

    /// Executable file permissions.
    ///
    /// On Unix: Sets `0o755` (rwxr-xr-x) - owner can read/write/execute, others can read/execute
    /// On Windows: Sets `readonly = false` (execution is decided by the file extension)
    Executable,
}

impl PermissionMode {
    /// Apply the permission mode to an existing file.
    ///
    /// # Platform Behavior
    /// - **Unix**: Sets mode bits via `PermissionsExt::from_mode()`
    /// - **Windows**: Clears the `readonly` attribute
    ///
    /// # Errors
    /// Returns [`Error::Write`] if the file does not exist or its permissions cannot be set.
    /// [`PermissionMode::Inherit`] never fails, since it touches nothing.
    pub fn apply_to_path(self, path: &Path) -> Result<()> {
        if self == Self::Inherit {
            return Ok(());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(
                |e| Error::Write {
                    path: path.to_path_buf(),
                    source: e,
                },
            )?;
        }

        #[cfg(not(unix))]
        {
            let mut perms = std::fs::metadata(path)
                .map_err(|e| Error::Write {
                    path: path.to_path_buf(),
                    source: e,
                })?
                .permissions();
            perms.set_readonly(false);
            std::fs::set_permissions(path, perms).map_err(|e| Error::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        Ok(())
    }
}
