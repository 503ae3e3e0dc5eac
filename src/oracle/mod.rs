//! Flight oracle subsystem.
//!
//! # Data Flow
//! ```text
//! OracleRequest {"data": ["AA100"]}
//!     → handler.rs (take first identifier)
//!     → client.rs (resolve key, GET /v1/flights, status check)
//!     → schema.rs (deserialize, validate, project data[0])
//!     → FlightRecord → FlightSummary
//!     → ResultEnvelope {"result": ...} | {"error": "..."}
//! ```
//!
//! # Design Decisions
//! - Errors are typed (`OracleError`) inside the subsystem and stringified
//!   only at the handler boundary
//! - No retries, no caching; each invocation is independent

pub mod client;
pub mod handler;
pub mod schema;
pub mod types;

pub use client::{FlightClient, API_KEY_ENV};
pub use handler::{handle_request, OracleRequest};
pub use types::{FlightRecord, FlightSummary, OracleError, ResultEnvelope};
