//! Request and response value types.
//!
//! # Data Flow
//! ```text
//! Caller constructs Request (method, path, optional body)
//!     → chain evaluates stages against it
//!     → exactly one stage produces a Response
//!     → Request and Response are dropped after the call
//! ```
//!
//! # Design Decisions
//! - No transport attached: requests are plain values, not parsed wire data
//! - Both types are immutable after construction
//! - Bodies are `Bytes` so clones are cheap reference bumps

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;
