use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` refines the level chosen by `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .init();
}
