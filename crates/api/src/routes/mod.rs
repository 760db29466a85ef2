pub mod category;
pub mod health;

use axum::middleware::from_extractor_with_state;
use axum::Router;

use crate::handlers;
use crate::middleware::api_key::RequireApiKey;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every request under `/api`, matched or not, must carry the API key;
/// the gate is layered over the whole tree including its fallback.
///
/// Route hierarchy:
///
/// ```text
/// /categories          list, create
/// /categories/{id}     get, update, delete
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .fallback(handlers::not_found)
        .layer(from_extractor_with_state::<RequireApiKey, _>(
            state.clone(),
        ))
}
