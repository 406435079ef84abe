//! JSON bodies exchanged between the backend and the frontend.

use serde::{Deserialize, Serialize};

/// Greeting payload. The `message` string is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness report. `uptime` is seconds since the backend router's state was
/// created, which the binary does once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub uptime: f64,
}

impl Health {
    pub fn ok(uptime: f64) -> Self {
        Self {
            status: "OK".to_string(),
            uptime,
        }
    }
}
