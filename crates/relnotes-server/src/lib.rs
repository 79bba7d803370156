//! HTTP API for relnotes.
//!
//! Exposes `POST /api/generate`, which validates a request, fetches commits
//! through a [`Generator`] and returns release notes and a changelog, and
//! `GET /health`.

mod handlers;
mod service;
mod validation;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use handlers::{ApiError, ErrorBody};
pub use service::{GenerateParams, GeneratedDocuments, Generator, ServiceError, ServiceResult};
pub use validation::{parse_date, validate_generate_request};

pub fn create_router(generator: Generator) -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(generator)
}
