//! Unit tests for error module.

use super::*;

// ============================================================================
// DbError Display Tests
// ============================================================================

#[test]
fn test_db_error_missing_url_display() {
    let error = DbError::MissingUrl("MYSQL_URL or DATABASE_URL".to_string());
    assert_eq!(
        format!("{}", error),
        "No database URL configured (set MYSQL_URL or DATABASE_URL)"
    );
}

#[test]
fn test_db_error_unsupported_scheme_display() {
    let error = DbError::UnsupportedScheme("sqlite".to_string());
    assert_eq!(
        format!("{}", error),
        "Unsupported database URL scheme: sqlite"
    );
}

#[test]
fn test_db_error_backend_mismatch_display() {
    let error = DbError::BackendMismatch {
        configured: "postgres".to_string(),
        url: "mysql".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "Backend mismatch: configured postgres, URL is mysql"
    );
}

#[test]
fn test_db_error_not_initialized_display() {
    assert_eq!(format!("{}", DbError::NotInitialized), "Database not initialized");
}

#[test]
fn test_db_error_closed_display() {
    assert_eq!(format!("{}", DbError::Closed), "Database pool closed");
}

#[test]
fn test_db_error_unknown_table_display() {
    let error = DbError::UnknownTable("robot".to_string());
    assert_eq!(format!("{}", error), "Unknown table: robot");
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_db_error_from_config_error() {
    let error: DbError = ConfigError::InvalidValue("max_connections must be positive".to_string()).into();
    assert!(matches!(error, DbError::Config(_)));
    assert_eq!(
        format!("{}", error),
        "Configuration error: invalid config value: max_connections must be positive"
    );
}

#[test]
fn test_db_error_from_sqlx_error() {
    let error: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(error, DbError::Sqlx(sqlx::Error::RowNotFound)));
    assert!(format!("{}", error).starts_with("Database error: "));
}
