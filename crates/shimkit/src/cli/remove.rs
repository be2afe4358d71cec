use anyhow::{Context, Result};
use clap::Args;
use shimkit_registry::Registry;

#[derive(Args, Clone, Debug)]
pub struct RemoveArg {
    #[arg(help = "Name of the shim")]
    pub name: String,
}

pub fn run<S, Q>(arg: RemoveArg, registry: &Registry<S, Q>) -> Result<()> {
    registry
        .remove(&arg.name)
        .with_context(|| format!("Failed to remove shim '{}'", arg.name))?;

    tracing::info!("Removed shim '{}'", arg.name);
    Ok(())
}
