//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (database)
//! - `/courses*`         - Course REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::domain::repositories::CourseRepository;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router<R: CourseRepository + 'static>(state: AppState<R>) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler::<R>))
        .merge(api::routes::course_routes::<R>())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
