//! Image storage collaborator.
//!
//! # Responsibilities
//! - Define the store contract the image stages delegate to
//! - Provide an in-memory implementation for demos and tests
//!
//! # Design Decisions
//! - Stages hold `Arc<dyn ImageStore>` so existence checks are injectable
//! - Ids are opaque strings taken from the request path; the store allocates
//!   sequential numeric ids for new images

pub mod memory;

use bytes::Bytes;

pub use memory::InMemoryImageStore;

/// Storage contract for the image stages.
pub trait ImageStore: Send + Sync + std::fmt::Debug {
    /// Retrieve image bytes by id.
    fn fetch(&self, id: &str) -> Option<Bytes>;

    /// Store `image` under `id`, returning whether an image already existed
    /// there. The body is persisted either way.
    fn upsert(&self, id: &str, image: Bytes) -> bool;

    /// Store a new image and return the freshly allocated id.
    fn insert(&self, image: Bytes) -> String;
}
