//! Greeter: a greeting backend and the web frontend that displays it.
//!
//! The backend answers `/`, `/api` and `/api/health` with fixed JSON bodies and
//! restricts cross-origin reads to one configured origin. The frontend renders
//! a page whose button fetches the backend greeting and shows it.

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod logging;
pub mod message;
pub mod middleware;
pub mod server;

pub use error::*;
