use anyhow::Result;
use clap::Args;
use shimkit_registry::Registry;
use std::io::{self, Write};

#[derive(Args, Clone, Debug)]
pub struct ShowArg {
    #[arg(help = "Name of the shim")]
    pub name: String,
}

/// Print the data record exactly as stored.
pub fn run<S, Q>(arg: ShowArg, registry: &Registry<S, Q>) -> Result<()> {
    let text = registry.show(&arg.name)?;

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
