use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DoH resolver
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-lookup.toml in current directory
    /// 3. /etc/ferrous-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.resolver_url {
            self.resolver.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        let url = self.resolver.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "No resolver URL configured".to_string(),
            ));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "Resolver URL must be http(s): {}",
                url
            )));
        }

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Resolver query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub resolver_url: Option<String>,
    pub log_level: Option<String>,
}
