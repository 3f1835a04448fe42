//! Chain assembly and dispatch.
//!
//! # Responsibilities
//! - Own the ordered stage list
//! - Validate the chain at construction (non-empty, terminal final stage)
//! - Evaluate stages in order until one produces a response
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins; stage order never changes at runtime
//! - Chain exhaustion is typed as an error but unreachable for a chain that
//!   passed construction

use uuid::Uuid;

use crate::chain::stage::HandlerStage;
use crate::error::ConfigurationError;
use crate::http::{Request, Response};

/// The assembled handler chain.
///
/// Built once from an ordered stage list and shared read-only thereafter;
/// concurrent [`handle`](Router::handle) calls are independent.
#[derive(Debug)]
pub struct Router {
    stages: Vec<Box<dyn HandlerStage>>,
}

impl Router {
    /// Assemble a chain from an ordered stage list.
    ///
    /// Fails with [`ConfigurationError::EmptyChain`] for an empty list and
    /// [`ConfigurationError::FallbackNotTerminal`] when the final stage does
    /// not match unconditionally.
    pub fn new(stages: Vec<Box<dyn HandlerStage>>) -> Result<Self, ConfigurationError> {
        let last = stages.last().ok_or(ConfigurationError::EmptyChain)?;
        if !last.is_terminal() {
            return Err(ConfigurationError::FallbackNotTerminal {
                stage: last.name().to_string(),
            });
        }
        Ok(Self { stages })
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a validated chain; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages in evaluation order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Evaluate stages in order until one produces a response.
    ///
    /// Exactly one stage's logic determines the result. The `Err` branch is
    /// only reachable for a chain that bypassed [`Router::new`] validation.
    pub fn handle(&self, req: &Request) -> Result<Response, ConfigurationError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "handle",
            %request_id,
            method = %req.method(),
            path = %req.path(),
        );
        let _guard = span.enter();

        for stage in &self.stages {
            if let Some(response) = stage.handle(req) {
                tracing::info!(
                    stage = stage.name(),
                    status = response.status().as_u16(),
                    "request handled"
                );
                return Ok(response);
            }
            tracing::debug!(stage = stage.name(), "no match, trying next stage");
        }

        tracing::error!("no stage matched; chain is missing its terminal fallback");
        Err(ConfigurationError::ChainExhausted)
    }
}
