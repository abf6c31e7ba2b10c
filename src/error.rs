//! Error types for the database layer.

use crate::config::ConfigError;

#[cfg(test)]
mod tests;

/// Database layer error types.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No connection string was configured or found in the environment.
    #[error("No database URL configured (set {0})")]
    MissingUrl(String),

    /// The connection string names a backend this crate does not speak.
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The configured backend disagrees with the connection string.
    #[error("Backend mismatch: configured {configured}, URL is {url}")]
    BackendMismatch {
        /// Backend named in configuration.
        configured: String,
        /// Backend implied by the URL scheme.
        url: String,
    },

    /// Error surfaced by the driver.
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The shared handle was requested before `init`.
    #[error("Database not initialized")]
    NotInitialized,

    /// The shared handle's pool was closed.
    #[error("Database pool closed")]
    Closed,

    /// No row shape is registered under this table name.
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}
