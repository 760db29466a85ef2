//! Shared-secret access gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderName;
use categories_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Marker extracted when the request's `X-API-Key` header exactly matches
/// the configured secret.
///
/// Mounted router-wide with `axum::middleware::from_extractor_with_state`,
/// so a rejected request never reaches a handler:
///
/// ```ignore
/// router.route_layer(from_extractor_with_state::<RequireApiKey, _>(state))
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(&API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(key) if key == state.config.api_key => Ok(RequireApiKey),
            Some(_) => {
                tracing::warn!(path = %parts.uri.path(), "Rejected request with wrong API key");
                Err(AppError::Core(CoreError::Unauthorized(
                    "Invalid API key".into(),
                )))
            }
            None => {
                tracing::warn!(path = %parts.uri.path(), "Rejected request without API key");
                Err(AppError::Core(CoreError::Unauthorized(
                    "Missing X-API-Key header".into(),
                )))
            }
        }
    }
}
