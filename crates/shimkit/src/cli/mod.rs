use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::env::ShimkitEnv;

pub mod add;
pub mod completions;
pub mod list;
pub mod remove;
pub mod show;

#[derive(Clone, Debug, Parser)]
#[command(name = "shimkit", version = env!("CARGO_PKG_VERSION"), about = "Shim management tool", long_about = None, propagate_version = true)]
pub struct App {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Default, Args)]
pub struct GlobalArgs {
    #[arg(short, long, global = true, help = "Show debug messages")]
    pub verbose: bool,

    #[arg(long, global = true, value_name = "DIR", help = "Registry directory holding the shims")]
    pub registry_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "FILE", help = "Stub executable copied for new shims")]
    pub stub: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(name = "add", about = "Create a new shim")]
    Add(add::AddArg),
    #[command(alias = "ls", name = "list", about = "List the added shims")]
    List(list::ListArg),
    #[command(name = "show", about = "Show information about a shim")]
    Show(show::ShowArg),
    #[command(alias = "rm", name = "remove", about = "Delete a shim")]
    Remove(remove::RemoveArg),
    #[command(name = "completions", about = "Print a shell completion script")]
    Completions(completions::CompletionsArg),
}

impl App {
    pub fn run(self) -> Result<()> {
        let env = ShimkitEnv::new(&self.global);
        match self.cmd {
            Commands::Add(arg) => add::run(arg, &env.registry()?),
            Commands::List(arg) => list::run(arg, &env.read_only_registry()?),
            Commands::Show(arg) => show::run(arg, &env.read_only_registry()?),
            Commands::Remove(arg) => remove::run(arg, &env.read_only_registry()?),
            Commands::Completions(arg) => completions::run(arg),
        }
    }
}
