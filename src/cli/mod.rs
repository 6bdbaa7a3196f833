//! Terminal-facing pieces: styling, prompts, reporting.

pub mod prompt;
pub mod report;
pub mod style;

use tracing_subscriber::EnvFilter;

/// Install the diagnostic channel.
///
/// `RUST_LOG` overrides everything; otherwise `--verbose` raises the
/// filter to debug so every workflow transition and git invocation is
/// visible on stderr.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "pushmr=debug" } else { "pushmr=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
