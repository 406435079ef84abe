//! Cross-origin policy for the backend.
//!
//! With a configured origin only that exact value is answered with
//! `Access-Control-Allow-Origin`; other origins get no CORS headers and the
//! browser refuses to expose the response. The handler still runs.

use http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ConfigError;

/// Which origins may read backend responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Only the given origin, compared byte-for-byte
    Restricted(HeaderValue),
    /// Any origin
    Open,
}

impl CorsPolicy {
    /// Build the policy from the configured origin.
    ///
    /// An origin that is not a valid header value is an error, never `Open`.
    pub fn from_origin(origin: Option<&str>) -> Result<Self, ConfigError> {
        match origin {
            Some(origin) => HeaderValue::from_str(origin)
                .map(CorsPolicy::Restricted)
                .map_err(|e| {
                    ConfigError::Validation(format!(
                        "frontend_origin is not a valid Origin value: {:?} ({})",
                        origin, e
                    ))
                }),
            None => Ok(CorsPolicy::Open),
        }
    }

    pub fn layer(&self) -> CorsLayer {
        let base = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([CONTENT_TYPE]);

        match self {
            // `list` only echoes the origin back when the request's Origin matches
            CorsPolicy::Restricted(origin) => {
                base.allow_origin(AllowOrigin::list([origin.clone()]))
            }
            CorsPolicy::Open => base.allow_origin(Any),
        }
    }

    /// Log the effective policy at startup.
    pub fn log(&self) {
        match self {
            CorsPolicy::Restricted(origin) => {
                tracing::info!(origin = ?origin, "CORS restricted to a single origin");
            }
            CorsPolicy::Open => {
                tracing::warn!("No frontend origin configured, CORS allows all origins");
            }
        }
    }
}
