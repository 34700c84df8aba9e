//! HTTP and realtime surface for the AI stock analyzer
//!
//! Exposes the analysis pipeline over two endpoints:
//!
//! - `POST /analyze` - run one analysis; domain errors are reported in the
//!   body with HTTP 200 (wire compatibility with existing clients)
//! - `GET /ws` - WebSocket channel carrying `node_update` progress events
//!   while an analysis runs; absent in serverless deployments
//!
//! A `GET /health` endpoint reports liveness. CORS is fully permissive.

pub mod config;
pub mod handlers;
pub mod progress;
pub mod ws;

pub use config::ServerConfig;
pub use progress::BroadcastProgress;

use analyzer_core::AnalysisPipeline;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for request handlers
pub struct AppState {
    /// The analysis pipeline, one instance shared by all requests
    pub pipeline: AnalysisPipeline,

    /// Progress fan-out; `None` when the realtime channel is disabled
    pub progress: Option<BroadcastProgress>,
}

/// Build the application router
///
/// The `/ws` route is only mounted when a progress channel exists.
pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze));

    if state.progress.is_some() {
        router = router.route("/ws", get(ws::ws_handler));
    }

    router.with_state(state).layer(CorsLayer::permissive())
}
