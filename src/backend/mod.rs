//! The greeting backend: three fixed JSON routes behind a CORS layer.

pub mod cors;
pub mod routes;
pub mod state;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{BackendConfig, ConfigError, CACHE_CONTROL_API};
use crate::middleware::request_id_layer;

pub use cors::CorsPolicy;
pub use state::BackendState;

/// Creates the backend router.
pub fn create_router(state: BackendState, cors: &CorsPolicy) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api", get(routes::api))
        .route("/api/health", get(routes::health))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ))
        .layer(cors.layer())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// Creates the backend router from configuration.
///
/// Fails if the configured origin cannot be used as a CORS allow-list entry.
pub fn router_from_config(config: &BackendConfig) -> Result<Router, ConfigError> {
    let cors = CorsPolicy::from_origin(config.frontend_origin.as_deref())?;
    cors.log();
    Ok(create_router(BackendState::new(), &cors))
}
