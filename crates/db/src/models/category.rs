//! Category entity model and DTOs.

use categories_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// DTO for renaming an existing category. The id comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Category as returned in the `data` field of API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: DbId,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl CategoryResponse {
    /// Map a list of rows, preserving order.
    pub fn from_list(categories: Vec<Category>) -> Vec<Self> {
        categories.into_iter().map(Self::from).collect()
    }
}
