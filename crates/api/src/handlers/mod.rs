//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers validate input,
//! delegate to the corresponding repository in `categories_db` and wrap the
//! outcome in a [`WebResponse`](crate::response::WebResponse).

pub mod category;

use axum::http::StatusCode;

use crate::response::WebResponse;

/// Fallback for paths no route matches.
pub async fn not_found() -> WebResponse<()> {
    WebResponse::empty(StatusCode::NOT_FOUND)
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> WebResponse<()> {
    WebResponse::empty(StatusCode::METHOD_NOT_ALLOWED)
}
