//! Terminal fallback stage.

use crate::chain::HandlerStage;
use crate::http::{Request, Response};

pub const STAGE_KIND: &str = "fallback";

/// Matches every request and answers a fixed 400, guaranteeing the chain
/// always terminates with a response.
#[derive(Debug, Default)]
pub struct BadRequestFallback;

impl BadRequestFallback {
    pub fn new() -> Self {
        Self
    }
}

impl HandlerStage for BadRequestFallback {
    fn name(&self) -> &str {
        STAGE_KIND
    }

    fn handle(&self, _req: &Request) -> Option<Response> {
        Some(Response::bad_request())
    }

    fn is_terminal(&self) -> bool {
        true
    }
}
