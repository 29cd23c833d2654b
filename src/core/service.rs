//! Service trait for author persistence

use crate::core::error::StorageError;
use crate::entities::author::{Author, AuthorChanges, NewAuthor, sort_alphabetical};
use async_trait::async_trait;

/// Service trait for managing authors
///
/// Implementations own durable storage: they assign ids and timestamps, and
/// each mutation touches exactly one row atomically. Handlers hold only
/// transient references to the entities returned here.
#[async_trait]
pub trait AuthorService: Send + Sync {
    /// Get an author by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, StorageError>;

    /// List all authors in storage order
    async fn find_all(&self) -> Result<Vec<Author>, StorageError>;

    /// List all authors by last name, then first name
    async fn find_all_alphabetical(&self) -> Result<Vec<Author>, StorageError> {
        let mut authors = self.find_all().await?;
        sort_alphabetical(&mut authors);
        Ok(authors)
    }

    /// Persist a new author, assigning its id and timestamps
    async fn create(&self, attrs: NewAuthor) -> Result<Author, StorageError>;

    /// Apply a partial update to an existing author
    ///
    /// Returns [`StorageError::RowMissing`] if the author was removed since
    /// it was loaded.
    async fn update(&self, author: &Author, changes: AuthorChanges)
    -> Result<Author, StorageError>;

    /// Remove an author
    async fn delete(&self, author: &Author) -> Result<(), StorageError>;

    /// Number of stored authors
    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.find_all().await?.len())
    }
}
