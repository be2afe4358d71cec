//! The data record format.
//!
//! ```text
//! path = <absolute-path>
//! args = <quoted-argument-string>
//! ```
//!
//! Two `\n`-terminated lines, in that order, with a literal ` = ` separator.
//! The stub runtime reads this file, so the layout is fixed.

use shimkit_platform::ArgQuoter;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const PATH_KEY: &str = "path = ";
const ARGS_KEY: &str = "args = ";

/// What a shim forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimRecord {
    pub target_path: PathBuf,
    pub fixed_args: Vec<String>,
}

impl ShimRecord {
    pub fn new(target_path: impl Into<PathBuf>, fixed_args: Vec<String>) -> Self {
        Self {
            target_path: target_path.into(),
            fixed_args,
        }
    }

    /// Join the fixed arguments into their persisted form.
    ///
    /// Fails if the target path is not valid Unicode or if either value
    /// would span more than one line once written.
    pub fn to_data_record<Q: ArgQuoter + ?Sized>(
        &self,
        quoter: &Q,
    ) -> Result<DataRecord, RecordError> {
        DataRecord::new(&self.target_path, quoter.quote(&self.fixed_args))
    }
}

/// A record as stored: the argument list is already quoted into one string.
///
/// Both values are single-line UTF-8, so the rendered form is always exactly
/// two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRecord {
    path: String,
    args: String,
}

impl DataRecord {
    pub fn new(path: &Path, args: impl Into<String>) -> Result<Self, RecordError> {
        let path = path.to_str().ok_or(RecordError::NonUnicodePath)?;
        let args = args.into();
        single_line(path, "path")?;
        single_line(&args, "args")?;

        Ok(Self {
            path: path.to_string(),
            args,
        })
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The quoted argument string, exactly as stored.
    pub fn args(&self) -> &str {
        &self.args
    }
}

fn single_line(value: &str, key: &'static str) -> Result<(), RecordError> {
    if value.contains(['\n', '\r']) {
        return Err(RecordError::LineBreak(key));
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing '{0}' line")]
    MissingLine(&'static str),

    #[error("line {0} does not start with '{1}'")]
    BadKey(usize, &'static str),

    #[error("unexpected content after line 2")]
    TrailingContent,

    #[error("target path is not valid UTF-8")]
    NonUnicodePath,

    #[error("{0} value contains a line break")]
    LineBreak(&'static str),
}

impl fmt::Display for DataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PATH_KEY}{}", self.path)?;
        writeln!(f, "{ARGS_KEY}{}", self.args)
    }
}

impl FromStr for DataRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_suffix('\n').unwrap_or(s);
        let mut lines = body.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

        let path = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or(RecordError::MissingLine("path"))?;
        let path = path
            .strip_prefix(PATH_KEY)
            .ok_or(RecordError::BadKey(1, PATH_KEY))?;

        let args = lines.next().ok_or(RecordError::MissingLine("args"))?;
        let args = args
            .strip_prefix(ARGS_KEY)
            .ok_or(RecordError::BadKey(2, ARGS_KEY))?;

        if lines.next().is_some() {
            return Err(RecordError::TrailingContent);
        }

        Ok(Self {
            path: path.to_string(),
            args: args.to_string(),
        })
    }
}
