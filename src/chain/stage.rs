//! Handler stage trait and the closure-based adapter.
//!
//! # Responsibilities
//! - Define the match-and-handle contract every stage implements
//! - Mark terminal stages so chain validation can verify totality
//! - Adapt (predicate, producer) closure pairs into stages
//!
//! # Design Decisions
//! - `handle` returns `Option<Response>`: `Some` claims the request and ends
//!   the chain, `None` passes control to the next stage
//! - Adding a request kind means adding a stage, never editing an existing one

use std::fmt;

use crate::http::{Request, Response};

/// One link in the handler chain: a matching rule plus its response logic.
pub trait HandlerStage: Send + Sync + fmt::Debug {
    /// Stage name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Inspect the request. `Some` produces the final response; `None`
    /// passes control to the next stage.
    fn handle(&self, req: &Request) -> Option<Response>;

    /// True if this stage matches unconditionally. The chain's final stage
    /// must be terminal or construction is rejected.
    fn is_terminal(&self) -> bool {
        false
    }
}

type Predicate = Box<dyn Fn(&Request) -> bool + Send + Sync>;
type Producer = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// A stage built from a (predicate, producer) pair of closures.
///
/// Useful for one-off stages and for inserting new request kinds without
/// defining a dedicated type.
pub struct PredicateStage {
    name: String,
    predicate: Predicate,
    producer: Producer,
    terminal: bool,
}

impl PredicateStage {
    /// Create a stage that responds only when `predicate` matches.
    pub fn new<P, F>(name: impl Into<String>, predicate: P, producer: F) -> Self
    where
        P: Fn(&Request) -> bool + Send + Sync + 'static,
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            producer: Box::new(producer),
            terminal: false,
        }
    }

    /// Create a terminal stage that matches every request.
    pub fn unconditional<F>(name: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(|_| true),
            producer: Box::new(producer),
            terminal: true,
        }
    }
}

impl fmt::Debug for PredicateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateStage")
            .field("name", &self.name)
            .field("terminal", &self.terminal)
            .finish()
    }
}

impl HandlerStage for PredicateStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, req: &Request) -> Option<Response> {
        if (self.predicate)(req) {
            Some((self.producer)(req))
        } else {
            None
        }
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
