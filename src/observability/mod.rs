//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; every handled request runs inside a
//!   span carrying a fresh request id
//! - Filter configurable via config and the RUST_LOG environment variable

pub mod logging;
