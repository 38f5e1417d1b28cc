//! HTTP API for the Veronese content platform.
//!
//! Exposes the blog collection, position list, and sitemap over a small
//! JSON API with permissive CORS:
//!
//! - `GET/POST/PUT/DELETE /api/blogs` — blog collection CRUD
//! - `GET/PUT /api/positions` — wholesale position list read/replace
//! - `GET /api/sitemap` — `application/xml` aggregation
//! - `GET /api/health` — liveness probe
//!
//! Requests are stateless; the only shared mutable resource is the backing
//! KV store injected into [`AppState`] at startup. Unmatched methods on a
//! matched path answer 405; every handler failure maps through [`AppError`]
//! onto the 400/401/403/404/500 taxonomy with a `{ error, timestamp }` body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use veronese_error::{HttpError, VeroneseResult};

pub mod blogs;
mod config;
mod error;
pub mod positions;
pub mod sitemap;
mod state;

pub use blogs::BlogParams;
pub use config::AppConfig;
pub use error::AppError;
pub use sitemap::build_sitemap;
pub use state::AppState;

/// Build the API router over shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/blogs",
            get(blogs::handle_get)
                .post(blogs::handle_post)
                .put(blogs::handle_put)
                .delete(blogs::handle_delete),
        )
        .route(
            "/api/positions",
            get(positions::handle_get).put(positions::handle_put),
        )
        .route("/api/sitemap", get(sitemap::handle_get))
        .layer(cors)
        .with_state(state)
}

/// Run the server until shutdown.
pub async fn start_server(config: AppConfig) -> VeroneseResult<()> {
    info!("Initializing state...");
    let bind = config.bind.clone();
    let state = AppState::new(config);

    let app = router(state);

    info!("Binding to {bind}");
    let listener = TcpListener::bind(&bind)
        .await
        .map_err(|e| HttpError::new(format!("bind {bind}: {e}")))?;
    info!("Server running on {bind}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(format!("serve: {e}")))?;

    info!("Server shutting down");
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
