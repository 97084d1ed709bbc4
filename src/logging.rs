//! Log setup for the binary.
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is not set.
pub fn default_directives(level: LevelFilter) -> String {
    format!("warn,schema_export={}", level.to_string().to_lowercase())
}

/// `RUST_LOG` wins over the `-v`/`-q` level.
pub fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
