//! Observability subsystem.
//!
//! Structured logging only; the oracle has no metrics or distributed
//! tracing surface.

pub mod logging;
