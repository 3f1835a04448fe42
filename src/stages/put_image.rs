//! Stage replacing an existing image.

use std::sync::Arc;

use http::{Method, StatusCode};

use crate::chain::HandlerStage;
use crate::http::{Request, Response};
use crate::storage::ImageStore;

pub const STAGE_KIND: &str = "put_image";

/// Matches `PUT` requests under the item prefix. Stores the body under the
/// id and answers 204 when an image already existed there, 404 when it did
/// not.
#[derive(Debug)]
pub struct PutImage {
    prefix: String,
    store: Arc<dyn ImageStore>,
}

impl PutImage {
    pub fn new(prefix: impl Into<String>, store: Arc<dyn ImageStore>) -> Self {
        Self {
            prefix: prefix.into(),
            store,
        }
    }
}

impl HandlerStage for PutImage {
    fn name(&self) -> &str {
        STAGE_KIND
    }

    fn handle(&self, req: &Request) -> Option<Response> {
        if req.method() != Method::PUT || !req.path().starts_with(&self.prefix) {
            return None;
        }

        let id = &req.path()[self.prefix.len()..];
        let image = req.body().cloned().unwrap_or_default();

        let existed = self.store.upsert(id, image);
        let status = if existed {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::NOT_FOUND
        };
        Some(Response::with_status(status))
    }
}
