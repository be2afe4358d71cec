use anyhow::{Context, Result};
use clap::Args;
use shimkit_registry::Registry;
use std::io::{self, Write};

#[derive(Args, Clone, Debug)]
pub struct ListArg {}

pub fn run<S, Q>(_: ListArg, registry: &Registry<S, Q>) -> Result<()> {
    let shims = registry.list().context("Failed to list shims")?;

    let mut out = io::stdout().lock();
    for name in shims {
        let name = name.context("Failed to list shims")?;
        writeln!(out, "{name}")?;
    }
    Ok(())
}
