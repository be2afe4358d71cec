//! Where the registry lives and which stub it installs.
//!
//! Each setting resolves, first match wins, from a command-line flag, an
//! environment variable, `config.toml`, then a built-in default.

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use serde::Deserialize;
use shimkit_platform::{HostQuoter, dir};
use shimkit_registry::{FileStub, Registry, RegistryLayout};
use std::env::consts::EXE_SUFFIX;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DIR_VAR: &str = "SHIMKIT_DIR";
pub const STUB_VAR: &str = "SHIMKIT_STUB";
pub const CONFIG_VAR: &str = "SHIMKIT_CONFIG";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry_dir: Option<PathBuf>,
    pub stub: Option<PathBuf>,
}

impl Config {
    /// Read `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config {}", path.display()));
            }
        };
        toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dir::user_config().map(|p| p.join("shimkit").join("config.toml"))
    }
}

/// Settings gathered from flags and the environment. `config.toml` is only
/// read for a setting that neither of those supplies, and the stub is only
/// resolved when a command needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimkitEnv {
    registry_dir: Option<PathBuf>,
    stub: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ShimkitEnv {
    pub fn new(global: &GlobalArgs) -> Self {
        let config_path = std::env::var_os(CONFIG_VAR)
            .map(PathBuf::from)
            .or_else(Config::default_path);

        Self::from_parts(global, |key| std::env::var_os(key), config_path)
    }

    fn from_parts(
        global: &GlobalArgs,
        var: impl Fn(&str) -> Option<OsString>,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            registry_dir: global
                .registry_dir
                .clone()
                .or_else(|| var(DIR_VAR).map(PathBuf::from)),
            stub: global.stub.clone().or_else(|| var(STUB_VAR).map(PathBuf::from)),
            config_path,
        }
    }

    fn config(&self) -> Result<Config> {
        match &self.config_path {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    pub fn registry_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.registry_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = self.config()?.registry_dir {
            return Ok(dir);
        }
        Ok(dir::user_home()
            .context("Failed to get home directory")?
            .join(".shimkit")
            .join("shims"))
    }

    pub fn stub(&self) -> Result<PathBuf> {
        if let Some(stub) = &self.stub {
            return Ok(stub.clone());
        }
        if let Some(stub) = self.config()?.stub {
            return Ok(stub);
        }
        Ok(dir::current_exe_dir()
            .context("Failed to locate the shimkit executable")?
            .join(format!("shim{EXE_SUFFIX}")))
    }

    fn layout(&self) -> Result<RegistryLayout> {
        let dir = self.registry_dir()?;
        tracing::debug!("Using registry directory: {}", dir.display());
        Ok(RegistryLayout::new(dir))
    }

    /// A registry able to add shims. Resolves the stub.
    pub fn registry(&self) -> Result<Registry<FileStub, HostQuoter>> {
        let layout = self.layout()?;
        let stub = self.stub()?;
        tracing::debug!("Using stub executable: {}", stub.display());
        Ok(Registry::new(layout, FileStub::new(stub), HostQuoter))
    }

    /// A registry for list, show, and remove. Never touches the stub.
    pub fn read_only_registry(&self) -> Result<Registry<(), ()>> {
        Ok(Registry::read_only(self.layout()?))
    }
}
