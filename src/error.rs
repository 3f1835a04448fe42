//! Error taxonomy for the request router.

use thiserror::Error;

/// Errors raised while loading, validating, or assembling the handler chain.
///
/// Every variant is a construction-time fault. A router built through
/// [`Router::new`](crate::chain::Router::new) or loaded from a validated
/// config never fails at request time: the terminal fallback guarantees
/// every request receives a response.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The stage list is empty.
    #[error("chain is empty: at least a terminal fallback stage is required")]
    EmptyChain,

    /// The final stage does not match unconditionally.
    #[error("final stage '{stage}' is not terminal: the chain could fall through without producing a response")]
    FallbackNotTerminal { stage: String },

    /// A stage definition names a kind that is not registered.
    #[error("unknown stage kind '{kind}'")]
    UnknownStageKind { kind: String },

    /// A stage definition is missing a required parameter.
    #[error("stage '{stage}' is missing required parameter '{parameter}'")]
    MissingParameter {
        stage: String,
        parameter: &'static str,
    },

    /// Every stage declined the request. Unreachable for a validated chain.
    #[error("chain exhausted without a response: missing terminal fallback")]
    ChainExhausted,
}
