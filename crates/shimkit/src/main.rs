use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use crate::cli::App;

mod cli;
mod env;
mod logging;

fn main() -> ExitCode {
    let app = App::parse();
    let verbose = app.global.verbose;
    logging::init(verbose);

    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if verbose {
                error!("Unexpected error encountered: {err:?}");
            } else {
                error!("{err:#}");
            }
            ExitCode::from(2)
        }
    }
}
