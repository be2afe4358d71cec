//! Registry operations over the record/stub file pairs.
//!
//! Every operation is a single linear pass over the filesystem. Nothing is
//! locked, retried, or rolled back: a failure after the first write of `add`
//! or the first deletion of `remove` leaves a record without a stub.

use crate::error::{Error, Result};
use crate::layout::{RECORD_SUFFIX, RegistryLayout};
use crate::name::ShimName;
use crate::record::{DataRecord, ShimRecord};
use crate::stub::StubProvisioner;
use shimkit_fs::{Options, PermissionMode};
use shimkit_platform::ArgQuoter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct Registry<S, Q> {
    layout: RegistryLayout,
    stub: S,
    quoter: Q,
}

impl Registry<(), ()> {
    /// A registry that can list, show, and remove shims but not add them.
    ///
    /// No stub source or quoter is needed to read the directory.
    pub fn read_only(layout: RegistryLayout) -> Self {
        Self::new(layout, (), ())
    }
}

impl<S, Q> Registry<S, Q> {
    pub fn new(layout: RegistryLayout, stub: S, quoter: Q) -> Self {
        Self {
            layout,
            stub,
            quoter,
        }
    }

    pub fn layout(&self) -> &RegistryLayout {
        &self.layout
    }

    /// Names of all registered shims, in directory enumeration order.
    ///
    /// A name is reported for every non-hidden `*.shim` entry; whether its
    /// stub exists is not checked.
    pub fn list(&self) -> Result<Shims> {
        let dir = self.layout.dir();
        let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(Shims {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    /// The verbatim text of the shim's data record.
    pub fn show(&self, name: &str) -> Result<String> {
        let name = self.layout.shim_name(name)?;
        self.read_record_text(&name)
    }

    /// The shim's data record, parsed. The argument string stays quoted.
    pub fn record(&self, name: &str) -> Result<DataRecord> {
        let name = self.layout.shim_name(name)?;
        let text = self.read_record_text(&name)?;
        text.parse().map_err(|source| Error::MalformedRecord {
            path: self.layout.record_path(&name),
            source,
        })
    }

    fn read_record_text(&self, name: &ShimName) -> Result<String> {
        let record_path = self.layout.record_path(name);
        if !record_path.is_file() {
            return Err(Error::UnknownShim(name.to_string()));
        }

        Ok(shimkit_fs::atomic_read_to_string(&record_path)?)
    }

    /// Delete both files of the shim `name`, stub first.
    ///
    /// Both files must exist; that is checked before either is deleted.
    pub fn remove(&self, name: &str) -> Result<()> {
        let name = self.layout.shim_name(name)?;
        let stub_path = self.layout.stub_path(&name);
        let record_path = self.layout.record_path(&name);

        debug!("Checking that files exist");
        for path in [&stub_path, &record_path] {
            if !path.is_file() {
                return Err(Error::MissingArtifact(path.clone()));
            }
        }

        debug!("Removing executable: {}", stub_path.display());
        remove_file(&stub_path)?;
        debug!("Removing data file: {}", record_path.display());
        remove_file(&record_path)?;

        Ok(())
    }
}

impl<S, Q> Registry<S, Q>
where
    S: StubProvisioner,
    Q: ArgQuoter,
{
    /// Create or overwrite the shim `name`, forwarding to `target` with
    /// `fixed_args` prepended to whatever the stub is invoked with.
    ///
    /// The target must be an existing regular file, and it and the quoted
    /// arguments must fit on one line of the data record. Both are checked
    /// before anything is written.
    pub fn add(&self, name: &str, target: impl AsRef<Path>, fixed_args: &[String]) -> Result<()> {
        let name = self.layout.shim_name(name)?;
        let target = target.as_ref();

        debug!("Checking that path exists");
        if !target.is_file() {
            let shown = std::path::absolute(target).unwrap_or_else(|_| target.to_path_buf());
            return Err(Error::TargetNotFound(shown));
        }
        let target = std::path::absolute(target).map_err(|source| Error::Resolve {
            path: target.to_path_buf(),
            source,
        })?;

        let record = ShimRecord::new(target, fixed_args.to_vec())
            .to_data_record(&self.quoter)
            .map_err(|source| Error::InvalidRecord {
                name: name.to_string(),
                source,
            })?;
        let record_path = self.layout.record_path(&name);
        debug!("Adding shim data file: {}", record_path.display());
        shimkit_fs::atomic_write(&record_path, record.to_string().as_bytes(), Options::new())?;

        let stub_path = self.layout.stub_path(&name);
        debug!("Copying shim executable to: {}", stub_path.display());
        if let Err(e) = self.install_stub(&stub_path) {
            warn!(
                "Shim '{name}' has a data record but no executable: {}",
                record_path.display()
            );
            return Err(e);
        }

        Ok(())
    }

    fn install_stub(&self, stub_path: &Path) -> Result<()> {
        let bytes = self.stub.provide_stub()?;
        shimkit_fs::atomic_write(
            stub_path,
            &bytes,
            Options::new().permissions(PermissionMode::Executable),
        )?;
        Ok(())
    }
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazy iterator over registered shim names. See [`Registry::list`].
#[derive(Debug)]
pub struct Shims {
    dir: PathBuf,
    entries: fs::ReadDir,
}

impl Iterator for Shims {
    type Item = Result<ShimName>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(Error::ReadDir {
                        path: self.dir.clone(),
                        source,
                    }));
                }
            };

            let file_name = entry.file_name();
            let Some(stem) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(RECORD_SUFFIX))
            else {
                continue;
            };
            if stem.is_empty() || stem.starts_with('.') {
                continue;
            }
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }

            return Some(Ok(ShimName::from_stem(stem)));
        }
    }
}
