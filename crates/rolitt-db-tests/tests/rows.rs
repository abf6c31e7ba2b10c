//! Typed read tests against the live database.

use rolitt_db::{Robot, SysApi, User};
use rolitt_db_tests::connect;

#[tokio::test]
async fn test_fetch_page_respects_limit() {
    let Some(db) = connect().await else {
        return;
    };

    let apis: Vec<SysApi> = db.fetch_page(5, 0).await.expect("Failed to fetch page");
    assert!(apis.len() <= 5);
}

#[tokio::test]
async fn test_count_matches_fetch_all() {
    let Some(db) = connect().await else {
        return;
    };

    let count = db.count::<User>().await.expect("Failed to count");
    let users: Vec<User> = db.fetch_all().await.expect("Failed to fetch users");
    assert_eq!(count, users.len() as i64);
}

#[tokio::test]
async fn test_robots_decode() {
    let Some(db) = connect().await else {
        return;
    };

    let robots: Vec<Robot> = db.fetch_page(10, 0).await.expect("Failed to fetch robots");
    for robot in robots {
        assert!(!robot.id.is_empty());
        assert!(!robot.auth_user_id.is_empty());
    }
}
