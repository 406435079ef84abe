//! Shared backend state.

use std::sync::Arc;
use std::time::Instant;

/// Read-only state shared by the backend handlers.
///
/// Uptime counts from `new()`, not from process start.
#[derive(Clone)]
pub struct BackendState {
    started: Arc<Instant>,
}

impl BackendState {
    pub fn new() -> Self {
        Self {
            started: Arc::new(Instant::now()),
        }
    }

    /// Seconds since the state was created, with sub-second precision.
    pub fn uptime(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for BackendState {
    fn default() -> Self {
        Self::new()
    }
}
