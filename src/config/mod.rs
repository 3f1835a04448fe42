//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → stages::build_chain assembles the Router
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; the default config is the demo image chain
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::{ObservabilityConfig, RouterConfig, StageConfig};
pub use validation::validate_config;
