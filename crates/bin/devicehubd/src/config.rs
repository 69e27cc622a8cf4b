//! Configuration loading from a TOML file with environment variable overrides.
//!
//! Looks for `devicehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Request identity settings.
    pub auth: AuthConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
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

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Seconds a request waits for a pooled connection.
    pub acquire_timeout_secs: u64,
    /// Seconds a single storage call may take before the request fails.
    pub query_timeout_secs: u64,
}

/// Identity attached to writes.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// User recorded as the owner of newly created device groups.
    pub default_owner_id: i64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `devicehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("devicehub.toml")?;
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

    /// Apply overrides from `lookup`. Later keys win, so the
    /// `DEVICEHUB_`-prefixed names beat the generic deployment ones.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("DEVICEHUB_HOST") {
            self.server.host = val;
        }
        for key in ["APP_PORT", "DEVICEHUB_PORT"] {
            if let Some(port) = lookup(key).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        for key in ["DATABASE_URL", "DEVICEHUB_DATABASE_URL"] {
            if let Some(val) = lookup(key) {
                self.database.url = val;
            }
        }
        if let Some(secs) = lookup("DEVICEHUB_QUERY_TIMEOUT_SECS").and_then(|val| val.parse().ok())
        {
            self.database.query_timeout_secs = secs;
        }
        if let Some(id) = lookup("DEVICEHUB_DEFAULT_OWNER_ID").and_then(|val| val.parse().ok()) {
            self.auth.default_owner_id = id;
        }
        for key in ["DEVICEHUB_LOG", "RUST_LOG"] {
            if let Some(val) = lookup(key) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be non-zero".to_string(),
            ));
        }
        if self.database.acquire_timeout_secs == 0 || self.database.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "database timeouts must be non-zero".to_string(),
            ));
        }
        if self.auth.default_owner_id < 1 {
            return Err(ConfigError::Validation(format!(
                "auth.default_owner_id must be positive, got {}",
                self.auth.default_owner_id
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database.acquire_timeout_secs)
    }

    #[must_use]
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.database.query_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:devicehub.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 3,
            query_timeout_secs: 5,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_owner_id: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devicehubd=info,devicehub=info,tower_http=debug".to_string(),
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

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:devicehub.db?mode=rwc");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(3));
        assert_eq!(config.query_timeout(), Duration::from_secs(5));
        assert_eq!(config.auth.default_owner_id, 1);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'
            max_connections = 2
            acquire_timeout_secs = 1
            query_timeout_secs = 10

            [auth]
            default_owner_id = 42

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(1));
        assert_eq!(config.query_timeout(), Duration::from_secs(10));
        assert_eq!(config.auth.default_owner_id, 42);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [database]
            query_timeout_secs = 2
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.query_timeout(), Duration::from_secs(2));
        assert_eq!(config.database.url, "sqlite:devicehub.db?mode=rwc");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_take_port_from_app_port() {
        let config = overridden(&[("APP_PORT", "8081")]);
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn should_prefer_prefixed_variables_over_generic_ones() {
        let config = overridden(&[
            ("APP_PORT", "8081"),
            ("DEVICEHUB_PORT", "9000"),
            ("DATABASE_URL", "sqlite:generic.db"),
            ("DEVICEHUB_DATABASE_URL", "sqlite:prefixed.db"),
        ]);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database_url(), "sqlite:prefixed.db");
    }

    #[test]
    fn should_ignore_unparsable_numeric_overrides() {
        let config = overridden(&[
            ("DEVICEHUB_PORT", "eighty"),
            ("DEVICEHUB_QUERY_TIMEOUT_SECS", "soon"),
        ]);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.query_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn should_let_rust_log_win_over_devicehub_log() {
        let config = overridden(&[("DEVICEHUB_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_owner_and_timeout() {
        let config = overridden(&[
            ("DEVICEHUB_DEFAULT_OWNER_ID", "7"),
            ("DEVICEHUB_QUERY_TIMEOUT_SECS", "12"),
            ("DEVICEHUB_HOST", "127.0.0.1"),
        ]);
        assert_eq!(config.auth.default_owner_id, 7);
        assert_eq!(config.query_timeout(), Duration::from_secs(12));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_pool_size() {
        let mut config = Config::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_query_timeout() {
        let mut config = Config::default();
        config.database.query_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_positive_owner() {
        let mut config = Config::default();
        config.auth.default_owner_id = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_owner_id"));
    }
}
