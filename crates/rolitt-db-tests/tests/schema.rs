//! Schema drift tests against the live database.

use rolitt_db::db::{self, Drift};
use rolitt_db::{TABLES, Table, User};
use rolitt_db_tests::connect;

#[tokio::test]
async fn test_ping() {
    let Some(db) = connect().await else {
        return;
    };

    db.ping().await.expect("Ping failed");
}

#[tokio::test]
async fn test_every_table_matches_schema() {
    let Some(db) = connect().await else {
        return;
    };

    let report = db::verify_schema(&db).await.expect("Schema check failed");

    assert_eq!(report.tables.len(), TABLES.len());
    assert!(report.is_clean(), "schema drift:\n{report}");
}

#[tokio::test]
async fn test_unknown_table_is_reported_missing() {
    let Some(db) = connect().await else {
        return;
    };

    let observed = db::observe_table(&db, "no_such_table_rolitt")
        .await
        .expect("Catalog query failed");
    assert!(observed.is_empty());
    assert_eq!(db::compare(&User::DEF, &observed), vec![Drift::MissingTable]);
}

#[tokio::test]
async fn test_verify_unregistered_table_name() {
    let Some(db) = connect().await else {
        return;
    };

    let result = db::verify_table(&db, "robot").await;
    assert!(matches!(result, Err(rolitt_db::DbError::UnknownTable(_))));
}
