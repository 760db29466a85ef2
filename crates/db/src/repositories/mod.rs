//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any [`sqlx::PgExecutor`] as the first argument, so they run
//! against the pool or inside a caller-owned transaction (`&mut *tx`).

pub mod category_repo;

pub use category_repo::CategoryRepo;
