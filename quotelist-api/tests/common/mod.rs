//! Common test utilities for integration tests
//!
//! - `TestContext`: real database + migrated schema + router (requires
//!   `DATABASE_URL`; used by the `#[ignore]`d end-to-end tests)
//! - `lazy_app`: router over a lazily-connecting pool pointed at an
//!   unreachable address, for exercising paths that must not touch the
//!   database
//! - request/response helpers

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use quotelist_api::app::{build_router, AppState};
use quotelist_api::config::{ApiConfig, Config, DatabaseConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Test context backed by a real database
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Connects to `DATABASE_URL`, applies migrations, and builds the app
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        quotelist_shared::db::migrations::ensure_database_exists(&config.database.url).await?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to the quotelist-api Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Builds the app over a pool that never successfully connects
///
/// The pool is lazy, so routes that short-circuit before any query (400
/// paths, the 404 fallback) behave exactly as in production; routes that do
/// query fail fast thanks to the short acquire timeout.
pub fn lazy_app() -> axum::Router {
    let config = Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://127.0.0.1:1/unreachable".to_string(),
            max_connections: 1,
        },
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy(&config.database.url)
        .expect("lazy pool from a well-formed url");

    build_router(AppState::new(pool, config))
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodiless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
