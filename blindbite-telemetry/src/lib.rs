use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const DEFAULT_LOG_LEVEL: &str = "info,blindbite_seating=debug";

/// `RUST_LOG` if set, otherwise `fallback`, otherwise [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Logs go to stderr so that command output
/// on stdout stays clean.
pub fn setup_telemetry(fallback: Option<&str>) {
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(env_filter(fallback)))
        .init();

    tracing::debug!("telemetry initialized");
}
