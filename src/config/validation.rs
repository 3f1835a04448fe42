//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the stage list forms a total chain (non-empty, terminal fallback)
//! - Check each stage kind is known and fully parameterized
//!
//! # Design Decisions
//! - Validation is a pure function: RouterConfig → Result<(), ConfigurationError>
//! - Runs before the config is accepted into the system

use crate::config::schema::{RouterConfig, StageConfig};
use crate::error::ConfigurationError;
use crate::stages;

/// Validate a configuration before a chain is built from it.
pub fn validate_config(config: &RouterConfig) -> Result<(), ConfigurationError> {
    let last = config
        .stages
        .last()
        .ok_or(ConfigurationError::EmptyChain)?;

    if last.kind != stages::fallback::STAGE_KIND {
        return Err(ConfigurationError::FallbackNotTerminal {
            stage: last.kind.clone(),
        });
    }

    for stage in &config.stages {
        validate_stage(stage)?;
    }

    Ok(())
}

fn validate_stage(stage: &StageConfig) -> Result<(), ConfigurationError> {
    match stage.kind.as_str() {
        stages::get_image::STAGE_KIND | stages::put_image::STAGE_KIND => {
            require(stage, stage.path_prefix.is_some(), "path_prefix")
        }
        stages::post_image::STAGE_KIND => require(stage, stage.path.is_some(), "path"),
        stages::fallback::STAGE_KIND => Ok(()),
        _ => Err(ConfigurationError::UnknownStageKind {
            kind: stage.kind.clone(),
        }),
    }
}

fn require(
    stage: &StageConfig,
    present: bool,
    parameter: &'static str,
) -> Result<(), ConfigurationError> {
    if present {
        Ok(())
    } else {
        Err(ConfigurationError::MissingParameter {
            stage: stage.kind.clone(),
            parameter,
        })
    }
}
