//! Error type for customer API calls.
//!
//! ERROR HANDLING
//! ==============
//! The three variants mirror the ways a call can fail: the request never
//! produced a response, the server answered with a non-2xx status, or a
//! 2xx body failed to decode. Callers convert all of them into a single
//! user-facing message; only the 400-with-body case carries structure the
//! panel inspects.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every operation in [`crate::net::api`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: the request produced no HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status. `body` holds the decoded
    /// JSON payload when the response carried one.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },
    /// A 2xx response whose body could not be decoded into the expected
    /// type, including attribute-boundary rejections.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The field-validation mapping from an HTTP 400 response, if this
    /// error is one.
    ///
    /// The remote service reports create-payload validation failures as a
    /// 400 whose body maps field names to messages. Anything else — other
    /// statuses, a missing body, or a non-object body — yields `None`.
    #[must_use]
    pub fn validation_body(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            Self::Status { status: 400, body: Some(body) } => body.as_object(),
            _ => None,
        }
    }
}
