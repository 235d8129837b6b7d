use ferrous_lookup_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Loading runs before the subscriber exists, so the summary is logged separately.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    let source = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path);

    info!(
        config_file = source.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        resolver = %config.resolver.url,
        "Configuration loaded"
    );
}
