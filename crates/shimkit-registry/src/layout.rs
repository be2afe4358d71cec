use crate::error::{Error, Result};
use crate::name::ShimName;
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Suffix of a shim's data record file.
pub const RECORD_SUFFIX: &str = ".shim";

/// Where a registry keeps its files and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLayout {
    dir: PathBuf,
    exe_suffix: String,
}

impl RegistryLayout {
    /// A layout rooted at `dir` using the host's executable suffix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            exe_suffix: EXE_SUFFIX.to_string(),
        }
    }

    /// Override the stub suffix, e.g. `".exe"` when managing a Windows
    /// registry from elsewhere.
    pub fn with_exe_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exe_suffix = suffix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exe_suffix(&self) -> &str {
        &self.exe_suffix
    }

    /// Validate `name` for this layout.
    ///
    /// On top of [`ShimName::new`], a name is rejected when its stub file
    /// would itself end in [`RECORD_SUFFIX`]. With an empty executable
    /// suffix the stub of `foo.shim` would otherwise be `foo.shim`, the data
    /// record of `foo`.
    pub fn shim_name(&self, name: &str) -> Result<ShimName> {
        let name = ShimName::new(name)?;
        if format!("{name}{}", self.exe_suffix).ends_with(RECORD_SUFFIX) {
            return Err(Error::InvalidName(
                name.into_string(),
                "its executable would collide with a data record",
            ));
        }
        Ok(name)
    }

    pub fn record_path(&self, name: &ShimName) -> PathBuf {
        self.dir.join(format!("{name}{RECORD_SUFFIX}"))
    }

    pub fn stub_path(&self, name: &ShimName) -> PathBuf {
        self.dir.join(format!("{name}{}", self.exe_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = RegistryLayout::new("/shims").with_exe_suffix(".exe");
        let name = ShimName::new("build").unwrap();

        assert_eq!(layout.record_path(&name), PathBuf::from("/shims/build.shim"));
        assert_eq!(layout.stub_path(&name), PathBuf::from("/shims/build.exe"));
    }

    #[test]
    fn test_dotted_name_keeps_full_stem() {
        let layout = RegistryLayout::new("/shims").with_exe_suffix(".exe");
        let name = ShimName::new("python3.12").unwrap();

        assert_eq!(
            layout.record_path(&name),
            PathBuf::from("/shims/python3.12.shim")
        );
        assert_eq!(layout.stub_path(&name), PathBuf::from("/shims/python3.12.exe"));
    }

    #[test]
    fn test_host_suffix_default() {
        let layout = RegistryLayout::new("/shims");
        assert_eq!(layout.exe_suffix(), EXE_SUFFIX);
    }

    #[test]
    fn test_empty_suffix_rejects_record_like_names() {
        let layout = RegistryLayout::new("/shims").with_exe_suffix("");

        let err = layout.shim_name("foo.shim").unwrap_err();
        assert!(matches!(err, Error::InvalidName(ref n, _) if n == "foo.shim"));

        let name = layout.shim_name("foo").unwrap();
        assert_ne!(layout.stub_path(&name), layout.record_path(&name));
        assert!(layout.shim_name("foo.shimx").is_ok());
    }

    #[test]
    fn test_exe_suffix_allows_record_like_names() {
        let layout = RegistryLayout::new("/shims").with_exe_suffix(".exe");
        let name = layout.shim_name("foo.shim").unwrap();
        assert_eq!(layout.stub_path(&name), PathBuf::from("/shims/foo.shim.exe"));
    }
}
