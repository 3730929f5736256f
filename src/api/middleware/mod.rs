//! HTTP middleware for request processing.
//!
//! Provides request tracing and the per-request timeout.

pub mod timeout;
pub mod tracing;
