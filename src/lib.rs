//! # Rolitt DB - Typed Row Shapes and Database Client
//!
//! Row types for every table of the Rolitt application schema, and a client
//! factory that binds them to either a MySQL-compatible database or a
//! PostgreSQL pool through [sqlx](https://crates.io/crates/sqlx).
//!
//! ## Key Features
//!
//! - **Typed Rows**: One `FromRow` struct per table, decodable from both
//!   MySQL and PostgreSQL result rows.
//!
//! - **Table Registry**: [`schema::TABLES`] maps every SQL table name to its
//!   column descriptors (name, nullability, database default).
//!
//! - **Backend Selection**: The connection string's scheme picks the backend
//!   at runtime (`mysql://` or `postgres://`).
//!
//! - **Shared Client**: [`db::init`] builds one process-wide pool and
//!   [`db::shared`] hands it out.
//!
//! - **Drift Check**: [`db::verify_schema`] compares the descriptors with the
//!   live `information_schema`.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration and connection string resolution |
//! | [`db`] | Backend selection, client factory, typed reads, drift check |
//! | [`error`] | Error types |
//! | [`schema`] | Row types, enums and the table registry |
//!
//! ## Configuration
//!
//! | Source | Key | Description |
//! |--------|-----|-------------|
//! | `config.toml` | `[database].url` | Connection string |
//! | environment | `MYSQL_URL` | MySQL connection string |
//! | environment | `DATABASE_URL` | PostgreSQL connection string |
//!
//! ## Example Usage
//!
//! ```no_run
//! use rolitt_db::config::DatabaseConfig;
//! use rolitt_db::{Robot, db};
//!
//! # async fn run() -> Result<(), rolitt_db::DbError> {
//! let db = db::init(&DatabaseConfig::default()).await?;
//! let robots: Vec<Robot> = db.fetch_page(20, 0).await?;
//!
//! if let Some(pool) = db.as_mysql() {
//!     let running: Vec<Robot> = sqlx::query_as("SELECT * FROM robots WHERE status = ?")
//!         .bind(rolitt_db::Status::Running)
//!         .fetch_all(pool)
//!         .await?;
//!     println!("{} of {} robots running", running.len(), robots.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Dependencies
//!
//! - **sqlx** (0.8): MySQL and PostgreSQL drivers, pools, `FromRow`
//! - **tokio** (1.49): Async runtime
//! - **serde** (1.0) / **toml** (0.9): Configuration and row serialization
//! - **chrono** (0.4): Timestamp columns
//! - **tracing** (0.1): Structured logging

pub mod config;
pub mod db;
pub mod error;
pub mod schema;

pub use db::{Backend, Database};
pub use error::DbError;
pub use schema::*;
