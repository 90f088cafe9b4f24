//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::kpis::{COMPARE_SITE_KPIS_PATH, GET_SITE_KPIS_PATH};
use crate::routes::registry::TOOL_REGISTRY_PATH;
use crate::routes::sites::{GET_SITE_PATH, LIST_SITES_PATH};

/// Largest accepted request body. KPI requests are a handful of fields.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the manifest is fetched by third-party agent hosts
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(LIST_SITES_PATH, get(handlers::list_sites))
        .route(GET_SITE_PATH, get(handlers::get_site))
        .route(GET_SITE_KPIS_PATH, post(handlers::get_kpis))
        .route(COMPARE_SITE_KPIS_PATH, post(handlers::compare_kpis))
        .route(TOOL_REGISTRY_PATH, get(handlers::tool_registry))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router = create_router(AppState::default());
        // If we got here, router was created successfully
    }
}
