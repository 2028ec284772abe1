//! HTTP surface: router, middleware and server lifecycle.
//!
//! - [`pages`]: HTML routes (forms post, then redirect to `/`)
//! - [`api`]: JSON API
//! - [`extract`]: cookie session extractor

pub mod api;
pub mod extract;
pub mod pages;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;

pub use extract::{CurrentSession, SESSION_COOKIE};

/// Stand-in for "no timeout" that keeps the layer stack's type fixed.
const TIMEOUT_DISABLED: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let timeout = state.config.server.request_timeout();
    let timeout = if timeout.is_zero() {
        TIMEOUT_DISABLED
    } else {
        timeout
    };
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // HTML pages
        .route("/", get(pages::index))
        .route("/healthz", get(pages::healthz))
        .route("/auth/close", post(pages::close_auth))
        .route("/auth/{mode}", get(pages::open_auth).post(pages::submit_auth))
        .route("/logout", post(pages::logout))
        .route("/tabs/{tab}", post(pages::select_tab))
        .route("/generate/thumbnail", post(pages::generate_thumbnail))
        .route("/generate/script", post(pages::generate_script))
        .route("/generate/video", post(pages::generate_video))
        .route("/generate/{kind}/clear", post(pages::clear_generation))
        // JSON API
        .route("/api/session", get(api::session))
        .route("/api/auth/{mode}", post(api::auth))
        .route("/api/logout", post(api::logout))
        .route("/api/tabs/{tab}", post(api::select_tab))
        .route("/api/generate", post(api::generate))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server and run until Ctrl-C.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::with_mock_backend(Arc::clone(&config));

    info!(
        name: "backend.config.loaded",
        auth_delay_ms = config.mock.auth_delay_ms,
        thumbnail_delay_ms = config.mock.thumbnail_delay_ms,
        script_delay_ms = config.mock.script_delay_ms,
        video_delay_ms = config.mock.video_delay_ms,
        enforce_password_match = config.auth.enforce_password_match,
        "Mock backend configured"
    );

    let sweeper = state.sessions.spawn_sweeper(
        config.session.idle_timeout(),
        config.session.sweep_interval(),
    );

    let app = build_router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(name: "server.signal.failed", error = %err, "Failed to listen for Ctrl-C");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!(name: "server.shutdown", "Shutdown signal received");
}
