//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the request router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Ordered stage definitions; file order is evaluation order.
    pub stages: Vec<StageConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    /// The canonical image chain from the demo domain.
    fn default() -> Self {
        Self {
            stages: default_stages(),
            observability: ObservabilityConfig::default(),
        }
    }
}

fn default_stages() -> Vec<StageConfig> {
    vec![
        StageConfig::item(crate::stages::get_image::STAGE_KIND, "api/images/"),
        StageConfig::item(crate::stages::put_image::STAGE_KIND, "api/images/"),
        StageConfig::collection(crate::stages::post_image::STAGE_KIND, "api/images"),
        StageConfig::kind_only(crate::stages::fallback::STAGE_KIND),
    ]
}

/// One stage definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StageConfig {
    /// Stage kind: get_image, put_image, post_image, fallback.
    pub kind: String,

    /// Item path prefix; required by get_image and put_image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,

    /// Exact collection path; required by post_image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl StageConfig {
    /// A stage matching on an item path prefix.
    pub fn item(kind: impl Into<String>, path_prefix: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path_prefix: Some(path_prefix.into()),
            path: None,
        }
    }

    /// A stage matching an exact collection path.
    pub fn collection(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path_prefix: None,
            path: Some(path.into()),
        }
    }

    /// A stage with no parameters.
    pub fn kind_only(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path_prefix: None,
            path: None,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter; overridden by RUST_LOG.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "request_router=info".to_string(),
        }
    }
}
