#![allow(dead_code)]

//! Test infrastructure for atrium-server API tests

use atrium_config::{FeaturesConfig, OrcidConfig};
use atrium_core::OrcidIdentity;
use atrium_jobs::JobQueue;
use atrium_orcid::OrcidClient;
use atrium_server::AppState;

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use axum::http::StatusCode;
use axum::routing::{any, post};
use axum::{Json, Router};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    atrium_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Client config pointed at a stub provider
pub fn test_orcid_config(token_url: &str, api_url: &str) -> OrcidConfig {
    OrcidConfig {
        client_id: Some("APP-TEST".to_string()),
        client_secret: Some("test-secret".to_string()),
        token_url: token_url.to_string(),
        api_url: api_url.to_string(),
        ..OrcidConfig::default()
    }
}

/// Create AppState for testing, with the ORCID client aimed at `token_url`
pub async fn create_test_app_state(token_url: &str) -> AppState {
    let pool = create_test_pool().await;
    let orcid = OrcidClient::new(&test_orcid_config(token_url, "http://127.0.0.1:9/api"))
        .expect("Failed to build test ORCID client");

    AppState {
        pool,
        orcid: Arc::new(orcid),
        jobs: JobQueue::new(),
        features: FeaturesConfig::default(),
    }
}

/// Spawn a stub token endpoint answering every POST with the given status
/// and JSON body. Returns the endpoint URL.
pub async fn spawn_token_endpoint(status: StatusCode, body: serde_json::Value) -> String {
    let app = Router::new().route(
        "/oauth/token",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub token endpoint");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/oauth/token", addr)
}

/// Spawn a stub member API that counts every request it receives.
/// Returns the base URL and the request counter.
pub async fn spawn_member_api() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_for_handler = hits.clone();

    let app = Router::new().route(
        "/{*path}",
        any(move || {
            let hits = hits_for_handler.clone();
            async move {
                hits.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                StatusCode::NO_CONTENT
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub member API");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

/// Seed an identity the way a completed authorization exchange would
pub async fn create_test_identity(pool: &SqlitePool, user_id: Uuid, orcid_id: &str) -> OrcidIdentity {
    let repo = atrium_db::OrcidIdentityRepository::new(pool.clone());
    let identity = OrcidIdentity::from_authorization(
        user_id,
        orcid_id.to_string(),
        "access-token".to_string(),
        Some("refresh-token".to_string()),
        Some(3600),
    );

    repo.upsert(&identity)
        .await
        .expect("Failed to seed test identity")
}

/// Count identity rows directly
pub async fn count_identities(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orcid_identities")
        .fetch_one(pool)
        .await
        .expect("Failed to count identities")
}
