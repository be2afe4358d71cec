use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::cli::App;

#[derive(Args, Clone, Debug)]
pub struct CompletionsArg {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

pub fn run(arg: CompletionsArg) -> Result<()> {
    let mut cmd = App::command();
    let mut stdout = std::io::stdout();
    generate(arg.shell, &mut cmd, "shimkit", &mut stdout);
    Ok(())
}
