//! Incoming request values.
//!
//! # Responsibilities
//! - Represent a request as an immutable value (method, path, optional body)
//! - Expose the fields stage predicates match on
//!
//! # Design Decisions
//! - Paths are matched as given; no normalization or format constraint
//! - Fields are private; the value cannot be mutated after creation

use bytes::Bytes;
use http::Method;

/// An immutable request evaluated against the handler chain.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    body: Option<Bytes>,
}

impl Request {
    /// Create a request without a body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Create a request carrying a body.
    pub fn with_body(method: Method, path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body.into()),
        }
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The request body, if one was attached.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
