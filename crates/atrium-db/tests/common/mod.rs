#![allow(dead_code)]

use atrium_core::OrcidIdentity;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    atrium_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build an identity the way the authorization exchange does
pub fn create_test_identity(user_id: Uuid) -> OrcidIdentity {
    OrcidIdentity::from_authorization(
        user_id,
        "0000-0002-1825-0097".to_string(),
        "access-token".to_string(),
        Some("refresh-token".to_string()),
        Some(3600),
    )
}
