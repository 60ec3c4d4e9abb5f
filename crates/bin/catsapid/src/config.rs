//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `catsapi.toml` in the working directory (or the path in
//! `CATSAPI_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use catsapi_domain::cat::Cat;
use serde::Deserialize;

const DEFAULT_PATH: &str = "catsapi.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Static API documentation.
    pub docs: DocsConfig,
    /// Records loaded into the store before serving.
    pub seed: Vec<Cat>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Static docs served at `/swagger`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory holding the Swagger UI bundle. Disabled when unset.
    pub dir: Option<String>,
}

impl Config {
    /// Load configuration from `catsapi.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CATSAPI_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("CATSAPI_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("CATSAPI_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("CATSAPI_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("CATSAPI_DOCS_DIR") {
            self.docs.dir = Some(val);
        }
        if let Some(val) = lookup("CATSAPI_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            docs: DocsConfig::default(),
            seed: vec![
                Cat::builder()
                    .id("id1")
                    .name("Toto")
                    .color("Grey")
                    .birth_date("2023-04-16")
                    .build(),
            ],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catsapid=info,catsapi_app=info,catsapi_adapter_http_axum=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.docs.dir.is_none());
        assert_eq!(config.seed.len(), 1);
        assert_eq!(config.seed[0].name, "Toto");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.seed.len(), 1);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            seed = []

            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [docs]
            dir = 'docs'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.docs.dir.as_deref(), Some("docs"));
        assert!(config.seed.is_empty());
    }

    #[test]
    fn should_parse_seed_records() {
        let toml = "
            [[seed]]
            id = 'id1'
            name = 'Toto'
            birthDate = '2023-04-16'

            [[seed]]
            name = 'Felix'
            color = 'Black'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].birth_date, "2023-04-16");
        assert!(config.seed[1].id.is_none());
        assert_eq!(config.seed[1].color, "Black");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        assert_eq!(Config::default().bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_apply_host_and_port_overrides() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[
            ("CATSAPI_HOST", "127.0.0.1"),
            ("CATSAPI_PORT", "9000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_split_bind_override() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("CATSAPI_BIND", "localhost:3000")]));
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("CATSAPI_PORT", "eighty")]));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_prefer_rust_log_over_catsapi_log() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("CATSAPI_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_enable_docs_from_env() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("CATSAPI_DOCS_DIR", "/srv/docs")]));
        assert_eq!(config.docs.dir.as_deref(), Some("/srv/docs"));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
