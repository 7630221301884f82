use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured
/// filter; an unparsable configured filter falls back to `info`.
pub fn setup_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
