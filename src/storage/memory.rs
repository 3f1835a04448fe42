//! In-memory image store.

use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use dashmap::DashMap;

use crate::storage::ImageStore;

/// Concurrent in-memory store backing the demo image stages.
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    images: DashMap<String, Bytes>,
    next_id: AtomicU64,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload an image under a fixed id.
    pub fn seed(&self, id: impl Into<String>, image: impl Into<Bytes>) {
        self.images.insert(id.into(), image.into());
    }
}

impl ImageStore for InMemoryImageStore {
    fn fetch(&self, id: &str) -> Option<Bytes> {
        self.images.get(id).map(|entry| entry.value().clone())
    }

    fn upsert(&self, id: &str, image: Bytes) -> bool {
        self.images.insert(id.to_string(), image).is_some()
    }

    fn insert(&self, image: Bytes) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = id.to_string();
        self.images.insert(id.clone(), image);
        id
    }
}
