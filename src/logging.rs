//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `dayjot=debug`
pub const LOG_ENV: &str = "DAYJOT_LOG";

/// Install the stderr subscriber. Safe to call more than once; later calls are ignored.
///
/// `DAYJOT_LOG` wins over `verbose`, which otherwise selects `debug` instead of `error`.
/// Fail-soft paths log at `warn`, so they stay quiet unless asked for.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("dayjot={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
