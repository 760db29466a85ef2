//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use categories_core::error::CoreError;
use categories_core::types::DbId;
use categories_core::validation::validate_request;
use categories_db::models::category::{CategoryResponse, CreateCategory, UpdateCategory};
use categories_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, Path};
use crate::response::WebResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<WebResponse<CategoryResponse>> {
    validate_request(&input)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok(WebResponse::ok(category.into()))
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<WebResponse<Vec<CategoryResponse>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(WebResponse::ok(CategoryResponse::from_list(categories)))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<WebResponse<CategoryResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(WebResponse::ok(category.into()))
}

/// PUT /api/categories/{id}
///
/// The name is validated before the row is looked at, so an invalid body is
/// a 400 whether or not the id exists.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateCategory>,
) -> AppResult<WebResponse<CategoryResponse>> {
    validate_request(&input)?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = id, "Category updated");
    Ok(WebResponse::ok(category.into()))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<WebResponse<()>> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(category_id = id, "Category deleted");
    Ok(WebResponse::empty(StatusCode::OK))
}
