//! Response values.
//!
//! # Responsibilities
//! - Represent the outcome of handling as an immutable value
//! - Provide constructors for the status shapes the stages produce
//!
//! # Design Decisions
//! - `location` is a dedicated field rather than a header map; creation
//!   responses are the only ones that set it
//! - Constructors mirror the status codes in use (200/201/204/404/400)

use bytes::Bytes;
use http::StatusCode;

/// An immutable response produced by exactly one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: Option<Bytes>,
    location: Option<String>,
}

impl Response {
    /// A response with the given status and no body.
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            body: None,
            location: None,
        }
    }

    /// 200 OK with a body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body.into()),
            location: None,
        }
    }

    /// 201 Created pointing at the new resource.
    pub fn created(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: None,
            location: Some(location.into()),
        }
    }

    /// 400 Bad Request, the fixed fallback response.
    pub fn bad_request() -> Self {
        Self::with_status(StatusCode::BAD_REQUEST)
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The Location header value, set on creation responses.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
