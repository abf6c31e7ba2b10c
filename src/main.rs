//! Rolitt DB schema checker
//!
//! Connects to the configured database and compares every table with its
//! row shape.

use rolitt_db::config::Config;
use rolitt_db::db;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, falling back to defaults and the environment
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        Config::load(&config_path)?
    } else {
        info!("No configuration file at {}, using defaults", config_path);
        Config::default()
    };

    let database = db::init(&config.database).await?;
    database.ping().await?;
    info!("Connected to {} database", database.backend());

    let report = db::verify_schema(database).await?;
    database.close().await;

    if report.is_clean() {
        info!("{}", report);
        return Ok(());
    }

    for table in report.drifted() {
        warn!(table = table.table, drift = table.drift.len(), "Table drifted");
    }
    anyhow::bail!(
        "schema drift detected ({} issues):\n{}",
        report.drift_count(),
        report
    );
}
