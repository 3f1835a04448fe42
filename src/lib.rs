//! Chain-of-responsibility request router.
//!
//! # Architecture Overview
//!
//! ```text
//!   Request (method, path, body)
//!       │
//!       ▼
//!   ┌──────────────────────────────────────────────┐
//!   │                   Router                      │
//!   │                                               │
//!   │  ┌───────────┐  no match  ┌───────────┐      │
//!   │  │ get_image │───────────▶│ put_image │─ ... │
//!   │  └─────┬─────┘            └─────┬─────┘      │
//!   │        │ match                  │            │
//!   │        ▼                        ▼            │
//!   │    Response                 Response         │
//!   │                                               │
//!   │  terminal: ┌──────────┐                      │
//!   │            │ fallback │──▶ 400 Bad Request   │
//!   │            └──────────┘                      │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! Stages are evaluated in construction order; the first stage whose
//! predicate matches produces the response and the chain stops. The chain
//! is validated at construction to end in a terminal fallback, so every
//! request receives exactly one response.

// Core subsystems
pub mod chain;
pub mod config;
pub mod error;
pub mod http;
pub mod stages;
pub mod storage;

// Cross-cutting concerns
pub mod observability;

pub use chain::{HandlerStage, PredicateStage, Router};
pub use config::RouterConfig;
pub use error::ConfigurationError;
pub use http::{Request, Response};
