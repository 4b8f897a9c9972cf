//! Application state and router builder
//!
//! Defines the shared application state and builds the Axum router with all
//! routes and middleware.
//!
//! # Architecture
//!
//! ```text
//! /
//! ├── /health                   # Health check
//! ├── /author                   # POST create, GET list
//! ├── /author/:id               # GET detail, PUT update, DELETE
//! ├── /author/:id/lists         # GET memberships with lists
//! ├── /list                     # POST create
//! ├── /lists                    # GET list
//! ├── /list/:id                 # GET detail, PUT update, DELETE
//! ├── /list/:id/authors         # GET memberships with authors
//! ├── /entry                    # POST create
//! └── /entry/:id                # PUT update, DELETE
//! ```
//!
//! # Middleware Stack
//!
//! 1. Panic catch-all (fixed generic 500)
//! 2. Logging (tower-http TraceLayer)
//! 3. CORS (tower-http CorsLayer, configured from `CORS_ORIGINS`)

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    config::Config,
    error::{ApiError, ErrorResponse},
    routes,
};

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Example
///
/// ```no_run
/// use quotelist_api::app::{build_router, AppState};
/// use quotelist_api::config::Config;
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
///
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    let author_routes = Router::new()
        .route(
            "/author",
            post(routes::author::create_author).get(routes::author::list_authors),
        )
        .route(
            "/author/:id",
            get(routes::author::get_author)
                .put(routes::author::update_author)
                .delete(routes::author::delete_author),
        )
        .route("/author/:id/lists", get(routes::author::get_author_lists));

    let list_routes = Router::new()
        .route("/list", post(routes::list::create_list))
        .route("/lists", get(routes::list::list_lists))
        .route(
            "/list/:id",
            get(routes::list::get_list)
                .put(routes::list::update_list)
                .delete(routes::list::delete_list),
        )
        .route("/list/:id/authors", get(routes::list::get_list_authors));

    let entry_routes = Router::new()
        .route("/entry", post(routes::entry::create_entry))
        .route(
            "/entry/:id",
            axum::routing::put(routes::entry::update_entry).delete(routes::entry::delete_entry),
        );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(author_routes)
        .merge(list_routes)
        .merge(entry_routes)
        .fallback(fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Unknown-path handler
async fn fallback() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Converts an otherwise-unhandled panic during request processing into a
/// 500 with a fixed generic body. The panic detail is logged, never sent.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
