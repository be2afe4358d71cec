use crate::error::{Error, Result};
use std::fmt;

/// A registered shim's name, used verbatim as the stem of both its files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShimName(String);

impl ShimName {
    /// Validate `name` as a file stem inside the registry directory.
    ///
    /// No case or whitespace normalization is applied. Names that would
    /// escape the directory, or that a listing would skip as hidden, are
    /// rejected.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.contains(['/', '\\']) {
            Some("contains a path separator")
        } else if name.starts_with('.') {
            Some("starts with '.'")
        } else if name.contains('\0') {
            Some("contains a NUL byte")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidName(name, reason)),
            None => Ok(Self(name)),
        }
    }

    /// Wrap a stem read back from the registry directory.
    pub(crate) fn from_stem(stem: &str) -> Self {
        Self(stem.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShimName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ShimName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
