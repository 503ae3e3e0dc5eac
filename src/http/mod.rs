//! HTTP surface of the oracle.
//!
//! # Data Flow
//! ```text
//! POST /oracle {"data": ["AA100"]}
//!     → server.rs (Axum handler, request ID, tracing)
//!     → oracle::handle_request
//!     → 200 {"result": ...} | 200 {"error": "..."}
//! ```

pub mod server;

pub use server::{build_router, serve};
