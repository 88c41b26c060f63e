use serde::{Deserialize, Serialize};

use super::asn_lookup::AsnLookupConfig;
use super::cors::CorsConfig;
use super::database::DatabaseConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "k-resolver.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/k-resolver/config.toml";

/// Main configuration structure for K-Resolver
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Deployment tag such as `development` or `production`
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP bind address and port
    #[serde(default)]
    pub server: ServerConfig,

    /// Relational store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Origins allowed by the CORS layer
    #[serde(default)]
    pub cors: CorsConfig,

    /// DNS Resolution Adapter settings
    #[serde(default)]
    pub dns: DnsConfig,

    /// ASN Lookup Adapter settings
    #[serde(default)]
    pub asn_lookup: AsnLookupConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            cors: CorsConfig::default(),
            dns: DnsConfig::default(),
            asn_lookup: AsnLookupConfig::default(),
        }
    }
}

fn default_environment() -> String {
    "development".to_string()
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. k-resolver.toml in current directory
    /// 3. /etc/k-resolver/config.toml
    /// 4. Default configuration
    ///
    /// Command-line and environment overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(env) = overrides.environment {
            self.environment = env;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(origins) = overrides.cors_origins {
            self.cors = CorsConfig::from_csv(&origins);
        }
        if let Some(key) = overrides.asn_api_key.filter(|k| !k.is_empty()) {
            self.asn_lookup.api_key = Some(key);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database URL cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "Database pool needs at least one connection".to_string(),
            ));
        }

        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }

        if self.asn_lookup.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "ASN lookup timeout cannot be 0".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "At least one CORS origin is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line (and environment) overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub environment: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub cors_origins: Option<String>,
    pub asn_api_key: Option<String>,
}
