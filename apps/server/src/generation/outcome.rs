//! In-band result union returned by every generation endpoint.
//!
//! Success and failure travel in the body, not the HTTP status: handlers
//! always answer 200 and the frontend branches on the `success` flag.

use serde::Serialize;

/// `{ "success": true, ...payload }` or `{ "success": false, "error": "..." }`.
/// The payload fields are flattened into the envelope, so the wire shape has
/// no nesting.
#[derive(Debug, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Outcome<T> {
    pub fn generated(data: T) -> Self {
        Outcome {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Outcome {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
