use anyhow::{Context, Result};
use clap::Args;
use shimkit_registry::{ArgQuoter, Registry, StubProvisioner};
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct AddArg {
    #[arg(help = "Name of the shim")]
    pub name: String,

    #[arg(help = "Executable the shim forwards to")]
    pub path: PathBuf,

    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments always passed to the executable, before the caller's own"
    )]
    pub args: Vec<String>,
}

pub fn run<S: StubProvisioner, Q: ArgQuoter>(arg: AddArg, registry: &Registry<S, Q>) -> Result<()> {
    registry
        .add(&arg.name, &arg.path, &arg.args)
        .with_context(|| format!("Failed to add shim '{}'", arg.name))?;

    tracing::info!("Added shim '{}' -> {}", arg.name, arg.path.display());
    Ok(())
}
