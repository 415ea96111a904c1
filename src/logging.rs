//! Diagnostic logging setup
//!
//! Events go to stderr so command output on stdout stays clean. `FINTRACK_LOG`
//! takes an `EnvFilter` directive string and overrides the verbosity flag.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "FINTRACK_LOG";

static TRACING_INIT: Once = Once::new();

/// Default directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fintrack=warn",
        1 => "fintrack=info",
        _ => "fintrack=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
