//! Integration tests for rolitt-db against a live database.
//!
//! These tests require a reachable database. Configure it via `MYSQL_URL` or
//! `DATABASE_URL`; when neither is set every test returns early.

use rolitt_db::{Backend, Database};
use rolitt_db::config::DatabaseConfig;

/// Returns the configured test database URL, if any.
#[must_use]
pub fn database_url() -> Option<String> {
    ["MYSQL_URL", "DATABASE_URL"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|url| !url.trim().is_empty())
}

/// Returns the test database URL if it names `backend`.
#[must_use]
pub fn database_url_for(backend: Backend) -> Option<String> {
    database_url().filter(|url| Backend::from_url(url).is_ok_and(|b| b == backend))
}

/// Connects to the test database, or returns `None` when none is configured.
///
/// # Panics
/// Panics if a URL is configured but the connection fails.
pub async fn connect() -> Option<Database> {
    let url = database_url()?;
    let config = DatabaseConfig {
        max_connections: 2,
        ..DatabaseConfig::with_url(url)
    };
    Some(
        Database::connect(&config)
            .await
            .expect("Failed to connect to test database"),
    )
}
