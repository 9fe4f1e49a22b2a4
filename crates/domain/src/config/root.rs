use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::translation::TranslationConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "scitra-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/scitra-dns/config.toml";

/// Main configuration structure for scitra-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream servers for ordinary resolution
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// SCION to IPv6 translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. scitra-dns.toml in current directory
    /// 3. /etc/scitra-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if !overrides.upstream_servers.is_empty() {
            self.upstream.servers = overrides.upstream_servers;
        }
        if let Some(prefix) = overrides.prefix {
            self.translation.prefix = prefix;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Rejects anything the handler chain cannot be built from, in particular
    /// translation prefixes that are not exactly an IPv6 /8.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.socket_addr()?;

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        for server in &self.upstream.servers {
            server.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Validation(format!("Invalid upstream server '{}': {}", server, e))
            })?;
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        self.translation
            .translation_prefix()
            .map_err(|e| ConfigError::InvalidPrefix(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_servers: Vec<String>,
    pub prefix: Option<String>,
    pub log_level: Option<String>,
}
