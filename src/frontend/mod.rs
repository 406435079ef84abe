//! The frontend: one page that fetches the backend greeting on click.
//!
//! Routes:
//! - GET /         - Page with the button and an empty response field
//! - POST /message - Fetch from the backend and render the outcome
//! - GET /health   - Liveness probe
//!
//! Each click is a separate request with its own fetch; the page the browser
//! shows is whichever response arrived last.

pub mod client;
pub mod templates;
pub mod view;

use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    response::Html,
    routing::{get, post},
    Extension, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tera::Tera;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::instrument;

use crate::config::CACHE_CONTROL_PAGE;
use crate::error::AppError;
use crate::middleware::{request_id_layer, RequestId};

pub use client::MessageClient;
pub use view::MessageView;

/// Shared frontend state.
#[derive(Clone)]
pub struct FrontendState {
    pub client: MessageClient,
    pub tera: Arc<Tera>,
}

impl FrontendState {
    pub fn new(client: MessageClient, tera: Tera) -> Self {
        Self {
            client,
            tera: Arc::new(tera),
        }
    }

    fn render(&self, view: &MessageView) -> Result<Html<String>, AppError> {
        let context = tera::Context::from_serialize(view.context())?;
        let html = self.tera.render(templates::INDEX_TEMPLATE, &context)?;
        Ok(Html(html))
    }
}

/// Landing page, nothing fetched yet.
pub async fn index(State(state): State<FrontendState>) -> Result<Html<String>, AppError> {
    state.render(&MessageView::Initial)
}

/// Button press: one fetch, then render either the message or the error text.
#[instrument(name = "frontend::message", skip(state, request_id), fields(api_url = %state.client.api_url()))]
pub async fn message(
    State(state): State<FrontendState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppError> {
    let result = state.client.fetch_message(request_id).await;

    match &result {
        Ok(message) => tracing::info!(message = %message, "Received message from backend"),
        Err(e) => tracing::warn!(request_id = %request_id.0, error = %e, "Error connecting to backend"),
    }

    state.render(&MessageView::from_fetch(&result))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Creates the frontend router.
pub fn create_router(state: FrontendState) -> Router {
    let page_routes = Router::new()
        .route("/", get(index))
        .route("/message", post(message))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PAGE),
        ));

    Router::new()
        .merge(page_routes)
        .route("/health", get(health))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
