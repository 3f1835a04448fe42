//! Stage serving a single image by id.

use std::sync::Arc;

use bytes::Bytes;
use http::Method;

use crate::chain::HandlerStage;
use crate::http::{Request, Response};
use crate::storage::ImageStore;

pub const STAGE_KIND: &str = "get_image";

/// Matches `GET` requests under the item prefix and serves the stored bytes.
#[derive(Debug)]
pub struct GetImage {
    prefix: String,
    store: Arc<dyn ImageStore>,
}

impl GetImage {
    pub fn new(prefix: impl Into<String>, store: Arc<dyn ImageStore>) -> Self {
        Self {
            prefix: prefix.into(),
            store,
        }
    }
}

impl HandlerStage for GetImage {
    fn name(&self) -> &str {
        STAGE_KIND
    }

    fn handle(&self, req: &Request) -> Option<Response> {
        if req.method() != Method::GET || !req.path().starts_with(&self.prefix) {
            return None;
        }

        let id = &req.path()[self.prefix.len()..];
        // Unknown ids still get a 200 with an empty placeholder body
        let image = self.store.fetch(id).unwrap_or_else(Bytes::new);
        Some(Response::ok(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryImageStore;
    use http::StatusCode;

    fn stage_with_seeded_store() -> GetImage {
        let store = InMemoryImageStore::new();
        store.seed("5", "image-bytes");
        GetImage::new("api/images/", Arc::new(store))
    }

    #[test]
    fn test_serves_stored_image() {
        let stage = stage_with_seeded_store();
        let resp = stage
            .handle(&Request::new(Method::GET, "api/images/5"))
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), Some(&Bytes::from("image-bytes")));
    }

    #[test]
    fn test_unknown_id_gets_placeholder() {
        let stage = stage_with_seeded_store();
        let resp = stage
            .handle(&Request::new(Method::GET, "api/images/404"))
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), Some(&Bytes::new()));
    }

    #[test]
    fn test_declines_other_methods_and_paths() {
        let stage = stage_with_seeded_store();
        assert!(stage
            .handle(&Request::new(Method::PUT, "api/images/5"))
            .is_none());
        assert!(stage
            .handle(&Request::new(Method::GET, "api/users/5"))
            .is_none());
    }
}
