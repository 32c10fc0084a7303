use std::env;

use tracing_subscriber::EnvFilter;

/// Sets up the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise `LOG_LEVEL` (any case) applies, defaulting to `debug`.
pub fn init_logging() {
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => {
            let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
            EnvFilter::new(level.to_lowercase())
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
