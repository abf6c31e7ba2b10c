//! Configuration module for loading and parsing TOML configuration files.

use crate::db::Backend;
use crate::error::DbError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database connection configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string. Falls back to the environment when absent.
    pub url: Option<String>,
    /// Expected backend. Inferred from the URL scheme when absent.
    pub backend: Option<Backend>,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Seconds to wait for a free connection.
    pub acquire_timeout_secs: u64,
    /// Seconds before an idle connection is closed.
    pub idle_timeout_secs: Option<u64>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            backend: None,
            max_connections: 10,
            min_connections: 0,
            acquire_timeout_secs: 5,
            idle_timeout_secs: None,
        }
    }
}

impl DatabaseConfig {
    /// Creates a configuration bound to an explicit connection string.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Acquire timeout as a [`Duration`].
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Idle timeout as a [`Duration`], if configured.
    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_secs.map(Duration::from_secs)
    }

    /// Resolves the connection string and backend from the process environment.
    ///
    /// # Errors
    /// Returns an error if no URL is found, the scheme is unsupported, or the
    /// scheme disagrees with the configured backend.
    pub fn resolve(&self) -> Result<(String, Backend), DbError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves the connection string using `lookup` for environment keys.
    ///
    /// Order: explicit `url`, then the configured backend's variable, then
    /// `MYSQL_URL` followed by `DATABASE_URL`.
    ///
    /// # Errors
    /// See [`DatabaseConfig::resolve`].
    pub fn resolve_with<F>(&self, lookup: F) -> Result<(String, Backend), DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match (&self.url, self.backend) {
            (Some(url), _) => Some(url.clone()),
            (None, Some(backend)) => lookup(backend.env_var()),
            (None, None) => lookup(Backend::MySql.env_var())
                .or_else(|| lookup(Backend::Postgres.env_var())),
        }
        .filter(|url| !url.trim().is_empty());

        let Some(url) = url else {
            let keys = match self.backend {
                Some(backend) => backend.env_var().to_string(),
                None => format!(
                    "{} or {}",
                    Backend::MySql.env_var(),
                    Backend::Postgres.env_var()
                ),
            };
            return Err(DbError::MissingUrl(keys));
        };

        let backend = Backend::from_url(&url)?;
        if let Some(configured) = self.backend
            && configured != backend
        {
            return Err(DbError::BackendMismatch {
                configured: configured.to_string(),
                url: backend.to_string(),
            });
        }

        Ok((url, backend))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "max_connections must be positive".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::InvalidValue(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "acquire_timeout_secs must be positive".to_string(),
            ));
        }
        if let Some(url) = &self.url
            && url.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue(
                "database url cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}
