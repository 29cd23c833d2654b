//! In-memory implementation of AuthorService for testing and development

use crate::core::entity::Entity;
use crate::core::error::StorageError;
use crate::core::service::AuthorService;
use crate::entities::author::{Author, AuthorChanges, NewAuthor};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

const STORE: &str = "authors";

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Author>,
    last_id: i64,
}

/// In-memory author service implementation
///
/// Ids start at 1 and are never reused. Uses RwLock for thread-safe access;
/// each mutation holds the write lock for its whole duration.
#[derive(Clone, Default)]
pub struct InMemoryAuthorService {
    table: Arc<RwLock<Table>>,
}

impl InMemoryAuthorService {
    /// Create a new in-memory author service
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(kind: &'static str) -> StorageError {
        StorageError::LockPoisoned { store: STORE, kind }
    }
}

#[async_trait]
impl AuthorService for InMemoryAuthorService {
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, StorageError> {
        let table = self.table.read().map_err(|_| Self::poisoned("read"))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, StorageError> {
        let table = self.table.read().map_err(|_| Self::poisoned("read"))?;

        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, attrs: NewAuthor) -> Result<Author, StorageError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned("write"))?;

        table.last_id += 1;
        let now = Utc::now();
        let author = Author {
            id: table.last_id,
            first_name: attrs.first_name,
            last_name: attrs.last_name,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(author.id, author.clone());

        tracing::debug!(author_id = author.id, "inserted author");
        Ok(author)
    }

    async fn update(
        &self,
        author: &Author,
        changes: AuthorChanges,
    ) -> Result<Author, StorageError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned("write"))?;

        let stored = table
            .rows
            .get_mut(&author.id)
            .ok_or(StorageError::RowMissing {
                entity_type: Author::resource_name_singular(),
                id: author.id,
            })?;

        changes.apply_to(stored);
        stored.updated_at = Utc::now();

        tracing::debug!(author_id = author.id, "updated author");
        Ok(stored.clone())
    }

    async fn delete(&self, author: &Author) -> Result<(), StorageError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned("write"))?;

        table
            .rows
            .remove(&author.id)
            .ok_or(StorageError::RowMissing {
                entity_type: Author::resource_name_singular(),
                id: author.id,
            })?;

        tracing::debug!(author_id = author.id, "deleted author");
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let table = self.table.read().map_err(|_| Self::poisoned("read"))?;

        Ok(table.rows.len())
    }
}
