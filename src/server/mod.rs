//! HTTP server startup shared by the backend and the frontend.
//!
//! Both servers run plain HTTP with graceful shutdown on SIGTERM/SIGINT.
//! TLS is expected to be terminated in front of them.

mod listen;
mod shutdown;

pub use listen::{resolve_addr, start_server, ServerError};
