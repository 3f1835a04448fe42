//! Stage creating a new image.

use std::sync::Arc;

use http::Method;

use crate::chain::HandlerStage;
use crate::http::{Request, Response};
use crate::storage::ImageStore;

pub const STAGE_KIND: &str = "post_image";

/// Matches `POST` to the collection path exactly. Stores the body under a
/// fresh id and answers 201 with a Location pointing at the new image.
#[derive(Debug)]
pub struct PostImage {
    collection: String,
    store: Arc<dyn ImageStore>,
}

impl PostImage {
    pub fn new(collection: impl Into<String>, store: Arc<dyn ImageStore>) -> Self {
        Self {
            collection: collection.into(),
            store,
        }
    }
}

impl HandlerStage for PostImage {
    fn name(&self) -> &str {
        STAGE_KIND
    }

    fn handle(&self, req: &Request) -> Option<Response> {
        if req.method() != Method::POST || req.path() != self.collection {
            return None;
        }

        let image = req.body().cloned().unwrap_or_default();
        let id = self.store.insert(image);
        // Collection may be configured with a leading slash; don't double it
        let collection = self.collection.trim_start_matches('/');
        Some(Response::created(format!("/{collection}/{id}")))
    }
}
