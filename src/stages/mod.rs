//! Concrete handler stages for the demo image API.
//!
//! # Data Flow
//! ```text
//! RouterConfig.stages (ordered StageConfig[])
//!     → build_chain (one build_stage per entry)
//!     → Router::new (chain validation)
//!     → immutable Router
//! ```
//!
//! # Design Decisions
//! - One stage per file; each exports a `STAGE_KIND` name used by config
//! - Stages share an injected `ImageStore`, never each other's state
//! - A new request kind is a new module plus a `build_stage` arm; existing
//!   stages are never edited

pub mod fallback;
pub mod get_image;
pub mod post_image;
pub mod put_image;

use std::sync::Arc;

use crate::chain::{HandlerStage, Router};
use crate::config::schema::{RouterConfig, StageConfig};
use crate::error::ConfigurationError;
use crate::storage::ImageStore;

pub use fallback::BadRequestFallback;
pub use get_image::GetImage;
pub use post_image::PostImage;
pub use put_image::PutImage;

/// Assemble a router from a configuration and a storage collaborator.
pub fn build_chain(
    config: &RouterConfig,
    store: Arc<dyn ImageStore>,
) -> Result<Router, ConfigurationError> {
    let stages = config
        .stages
        .iter()
        .map(|stage| build_stage(stage, store.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    Router::new(stages)
}

/// Build a single stage from its definition.
pub fn build_stage(
    config: &StageConfig,
    store: Arc<dyn ImageStore>,
) -> Result<Box<dyn HandlerStage>, ConfigurationError> {
    match config.kind.as_str() {
        get_image::STAGE_KIND => {
            let prefix = required(config, config.path_prefix.as_deref(), "path_prefix")?;
            Ok(Box::new(GetImage::new(prefix, store)))
        }
        put_image::STAGE_KIND => {
            let prefix = required(config, config.path_prefix.as_deref(), "path_prefix")?;
            Ok(Box::new(PutImage::new(prefix, store)))
        }
        post_image::STAGE_KIND => {
            let path = required(config, config.path.as_deref(), "path")?;
            Ok(Box::new(PostImage::new(path, store)))
        }
        fallback::STAGE_KIND => Ok(Box::new(BadRequestFallback::new())),
        _ => Err(ConfigurationError::UnknownStageKind {
            kind: config.kind.clone(),
        }),
    }
}

fn required<'a>(
    config: &StageConfig,
    value: Option<&'a str>,
    parameter: &'static str,
) -> Result<&'a str, ConfigurationError> {
    value.ok_or_else(|| ConfigurationError::MissingParameter {
        stage: config.kind.clone(),
        parameter,
    })
}
