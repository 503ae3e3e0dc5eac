//! Flight status oracle backed by the aviationstack API.
//!
//! # Architecture Overview
//!
//! ```text
//!   {"data": ["AA100"]}          ┌──────────────────────────────────────┐
//!   ──────────────────────────▶  │            FLIGHT ORACLE             │
//!   (CLI lookup / POST /oracle)  │                                      │
//!                                │  handler ──▶ client ──▶ aviationstack│
//!                                │     │           │        /v1/flights │
//!                                │     │           ▼                    │
//!                                │     │        schema (validate &      │
//!                                │     │         project data[0])       │
//!                                │     ▼                                │
//!   {"result": {...}} |          │  envelope boundary (every failure    │
//!   {"error": "..."}  ◀───────── │   becomes an error envelope)         │
//!                                └──────────────────────────────────────┘
//! ```
//!
//! One lookup per invocation: build the request, perform one GET, validate
//! the response shape, project eight fields, wrap the outcome. No retries,
//! no caching, no state across calls.

pub mod config;
pub mod http;
pub mod observability;
pub mod oracle;

pub use config::OracleConfig;
pub use oracle::{
    handle_request, FlightClient, FlightRecord, FlightSummary, OracleError, OracleRequest,
    ResultEnvelope,
};
