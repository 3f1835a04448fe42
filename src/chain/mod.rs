//! Handler chain subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, body)
//!     → router.rs (iterate stages in order)
//!     → stage.rs (each stage: match-and-handle)
//!     → Return: first stage's Response, or terminal fallback's 400
//!
//! Chain Assembly (at startup):
//!     StageConfig[] or Box<dyn HandlerStage>[]
//!     → Validate: non-empty, final stage terminal
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Chain assembled once, immutable at runtime (thread-safe without locks)
//! - First match wins; evaluation order is construction order
//! - Exactly one stage produces the response for any request
//! - Terminal fallback required at construction, so handling is total

pub mod router;
pub mod stage;

pub use router::Router;
pub use stage::{HandlerStage, PredicateStage};
