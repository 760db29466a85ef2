//! Shared response envelope for API handlers.
//!
//! Every response on the categories surface, success or failure, is a
//! `{ "code": 200, "status": "OK", "data": ... }` envelope. `data` is left
//! out entirely when there is no payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ code, status, data }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(WebResponse::ok(CategoryResponse::from(category)))
/// ```
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> WebResponse<T> {
    /// 200 OK carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, Some(data))
    }

    /// Envelope for `status`, with the reason phrase as `status`.
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or("Unknown"),
            data,
        }
    }
}

impl WebResponse<()> {
    /// Envelope without a payload, used by deletes and errors.
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
