use ferrous_lookup_domain::config::LogFormat;
use ferrous_lookup_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(true).init(),
    }

    info!("Logging initialized at level: {}", config.logging.level);
}
