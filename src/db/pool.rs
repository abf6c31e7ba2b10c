//! Database client construction for the MySQL and PostgreSQL backends.

use super::Backend;
use crate::config::DatabaseConfig;
use crate::error::DbError;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Database as SqlxDatabase, pool::PoolOptions};
use tokio::sync::OnceCell;
use tracing::{debug, info};

static SHARED: OnceCell<Database> = OnceCell::const_new();

/// Database client bound to one backend's connection pool.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub enum Database {
    /// MySQL-compatible connection pool.
    MySql(MySqlPool),
    /// PostgreSQL connection pool.
    Postgres(PgPool),
}

impl Database {
    /// Connects to the database named by the configuration.
    ///
    /// # Arguments
    /// * `config` - Connection and pool settings
    ///
    /// # Errors
    /// Returns an error if the URL cannot be resolved or the connection
    /// cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let (url, backend) = config.resolve()?;

        let db = match backend {
            Backend::MySql => Self::MySql(
                pool_options::<sqlx::MySql>(MySqlPoolOptions::new(), config)
                    .connect(&url)
                    .await?,
            ),
            Backend::Postgres => Self::Postgres(
                pool_options::<sqlx::Postgres>(PgPoolOptions::new(), config)
                    .connect(&url)
                    .await?,
            ),
        };

        info!(
            backend = %backend,
            max_connections = config.max_connections,
            "Database connection pool established"
        );

        Ok(db)
    }

    /// Builds a client without opening a connection until first use.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be resolved or parsed.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DbError> {
        let (url, backend) = config.resolve()?;

        let db = match backend {
            Backend::MySql => Self::MySql(
                pool_options::<sqlx::MySql>(MySqlPoolOptions::new(), config).connect_lazy(&url)?,
            ),
            Backend::Postgres => Self::Postgres(
                pool_options::<sqlx::Postgres>(PgPoolOptions::new(), config)
                    .connect_lazy(&url)?,
            ),
        };

        debug!(backend = %backend, "Lazy database pool created");

        Ok(db)
    }

    /// Returns the backend this client talks to.
    #[must_use]
    pub fn backend(&self) -> Backend {
        match self {
            Self::MySql(_) => Backend::MySql,
            Self::Postgres(_) => Backend::Postgres,
        }
    }

    /// Returns the MySQL pool, if this client is bound to MySQL.
    #[must_use]
    pub fn as_mysql(&self) -> Option<&MySqlPool> {
        match self {
            Self::MySql(pool) => Some(pool),
            Self::Postgres(_) => None,
        }
    }

    /// Returns the PostgreSQL pool, if this client is bound to PostgreSQL.
    #[must_use]
    pub fn as_postgres(&self) -> Option<&PgPool> {
        match self {
            Self::Postgres(pool) => Some(pool),
            Self::MySql(_) => None,
        }
    }

    /// Round-trips a trivial query.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached.
    pub async fn ping(&self) -> Result<(), DbError> {
        match self {
            Self::MySql(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Self::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    /// Returns `true` once [`close`](Self::close) has been called on this
    /// client or any clone of it.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match self {
            Self::MySql(pool) => pool.is_closed(),
            Self::Postgres(pool) => pool.is_closed(),
        }
    }

    /// Closes every pooled connection.
    ///
    /// Closing is shared by every clone. Closing the process-wide client
    /// makes [`shared`] return [`DbError::Closed`] from then on; the handle
    /// cannot be initialized again.
    pub async fn close(&self) {
        match self {
            Self::MySql(pool) => pool.close().await,
            Self::Postgres(pool) => pool.close().await,
        }
        info!(backend = %self.backend(), "Database connection pool closed");
    }
}

fn pool_options<DB: SqlxDatabase>(
    options: PoolOptions<DB>,
    config: &DatabaseConfig,
) -> PoolOptions<DB> {
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
}

/// Initializes the process-wide client.
///
/// Only the first call connects; later calls return the existing client and
/// ignore `config`.
///
/// # Errors
/// Returns an error if the first connection attempt fails. A failed attempt
/// leaves the handle uninitialized.
pub async fn init(config: &DatabaseConfig) -> Result<&'static Database, DbError> {
    SHARED.get_or_try_init(|| Database::connect(config)).await
}

/// Returns the process-wide client.
///
/// # Errors
/// Returns [`DbError::NotInitialized`] before [`init`] has succeeded and
/// [`DbError::Closed`] after the client has been closed.
pub fn shared() -> Result<&'static Database, DbError> {
    SHARED.get().ok_or(DbError::NotInitialized).and_then(ensure_open)
}

fn ensure_open(db: &Database) -> Result<&Database, DbError> {
    if db.is_closed() {
        return Err(DbError::Closed);
    }
    Ok(db)
}
