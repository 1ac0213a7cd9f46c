//! Tracing setup shared by every command.
//!
//! Logs go to stderr so they never interleave with tables or JSON on stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default level when `RUST_LOG` is unset and `--verbose` is not given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging with the default level.
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize logging with a specific default level.
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for tests (captured per test, safe to call repeatedly).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
