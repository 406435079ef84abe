//! Greeting and health handlers.
//!
//! Handlers ignore query strings and bodies and cannot fail.

use axum::{extract::State, Json};

use super::state::BackendState;
use crate::message::{Health, Message};

pub const ROOT_MESSAGE: &str = "Hello from Node.js Backend at /!";
pub const API_MESSAGE: &str = "Hello from Node.js Backend at /api!";

/// `GET /`
pub async fn root() -> Json<Message> {
    Json(Message::new(ROOT_MESSAGE))
}

/// `GET /api`
pub async fn api() -> Json<Message> {
    Json(Message::new(API_MESSAGE))
}

/// `GET /api/health`: liveness plus process uptime.
pub async fn health(State(state): State<BackendState>) -> Json<Health> {
    Json(Health::ok(state.uptime()))
}
