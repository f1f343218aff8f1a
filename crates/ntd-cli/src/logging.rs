//! Diagnostic logging to stderr.
//!
//! Off the game's stdout so transcripts stay clean. Verbosity comes from the
//! `NTD_LOG` environment variable using `EnvFilter` syntax, e.g.
//! `NTD_LOG=debug` or `NTD_LOG=ntd_fair=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NTD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. A second call keeps the first subscriber.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
