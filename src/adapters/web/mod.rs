//! Web server adapter.
//!
//! Serves the finance dashboard summary as JSON over Axum. The record provider
//! is shared read-only across handlers, so requests run without locking.

mod error;
mod handlers;

pub use error::WebError;
pub use handlers::*;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::ports::record_provider::RecordProvider;

pub struct AppState {
    pub records: Arc<dyn RecordProvider + Send + Sync>,
}

/// Routes, CORS, and request tracing.
pub fn build_router(state: AppState, cors: bool) -> Router {
    let router = routes(state).layer(TraceLayer::new_for_http());
    if cors {
        router.layer(cors_layer())
    } else {
        router
    }
}

/// Routes only; used by tests that drive handlers directly.
pub fn build_test_router(state: AppState) -> Router {
    routes(state)
}

fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/finance", get(handlers::finance_summary))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

/// Any origin, method and header, with credentials. Origins, methods and
/// headers are mirrored from the request since a literal `*` cannot be
/// combined with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
