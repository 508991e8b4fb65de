//! Diagnostic logging
//!
//! `tracing` events go to stderr so stdout stays clean for `--json`.
//! `RUST_LOG` overrides the level picked from `-v` flags.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("persistgen={}", level_for(verbose))))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(verbose > 2)
        .without_time()
        .try_init();
}
