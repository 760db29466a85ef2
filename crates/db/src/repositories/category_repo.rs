//! Repository for the `categories` table.

use categories_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories. Every method issues exactly one
/// statement.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row with its generated id.
    pub async fn create<'e, E>(executor: E, input: &CreateCategory) -> Result<Category, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(executor)
            .await
    }

    /// Find a category by its id.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Category>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Category>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(executor)
            .await
    }

    /// Rename a category.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(executor)
            .await
    }

    /// Delete a category by id. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
