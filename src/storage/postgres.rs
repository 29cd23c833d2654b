//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresAuthorService`, an [`AuthorService`] backed by a
//! PostgreSQL database via `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! authors-api = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::entity::Entity;
use crate::core::error::StorageError;
use crate::core::service::AuthorService;
use crate::entities::author::{Author, AuthorChanges, NewAuthor};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const CREATE_AUTHORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS authors (
    id          BIGSERIAL PRIMARY KEY,
    first_name  TEXT NOT NULL CHECK (btrim(first_name) <> ''),
    last_name   TEXT NOT NULL CHECK (btrim(last_name) <> ''),
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const COLUMNS: &str = "id, first_name, last_name, created_at, updated_at";

/// Author storage service backed by PostgreSQL.
///
/// Every mutation is a single `... RETURNING` statement, so it is atomic
/// without an explicit transaction.
#[derive(Clone, Debug)]
pub struct PostgresAuthorService {
    pool: PgPool,
}

impl PostgresAuthorService {
    /// Create a new `PostgresAuthorService` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the `authors` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_AUTHORS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn missing(id: i64) -> StorageError {
        StorageError::RowMissing {
            entity_type: Author::resource_name_singular(),
            id,
        }
    }
}

#[async_trait]
impl AuthorService for PostgresAuthorService {
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, StorageError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            "SELECT {COLUMNS} FROM authors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn find_all(&self) -> Result<Vec<Author>, StorageError> {
        let authors =
            sqlx::query_as::<_, Author>(&format!("SELECT {COLUMNS} FROM authors ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(authors)
    }

    async fn find_all_alphabetical(&self) -> Result<Vec<Author>, StorageError> {
        let authors = sqlx::query_as::<_, Author>(&format!(
            "SELECT {COLUMNS} FROM authors ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    async fn create(&self, attrs: NewAuthor) -> Result<Author, StorageError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            "INSERT INTO authors (first_name, last_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(attrs.first_name)
        .bind(attrs.last_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(author_id = author.id, "inserted author");
        Ok(author)
    }

    async fn update(
        &self,
        author: &Author,
        changes: AuthorChanges,
    ) -> Result<Author, StorageError> {
        let updated = sqlx::query_as::<_, Author>(&format!(
            "UPDATE authors \
             SET first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(author.id)
        .bind(changes.first_name)
        .bind(changes.last_name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::missing(author.id))?;

        tracing::debug!(author_id = author.id, "updated author");
        Ok(updated)
    }

    async fn delete(&self, author: &Author) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(author.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Self::missing(author.id));
        }

        tracing::debug!(author_id = author.id, "deleted author");
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
