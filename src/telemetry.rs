//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ServerConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured `log_level`. Production emits JSON
/// lines; everything else gets the human-readable formatter. Output goes to
/// stderr so the terminal walkthrough keeps stdout for itself.
pub fn init_tracing(config: &ServerConfig) {
    let env_filter = build_filter(&config.log_level);

    if config.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }
}

fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
