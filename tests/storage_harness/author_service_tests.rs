//! Macro-generated test suite for `AuthorService` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use authors::storage::InMemoryAuthorService;
//!
//! author_service_tests!(InMemoryAuthorService::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_find`: create then retrieve, verify all fields
//! - `test_find_nonexistent`: unknown id returns None
//! - `test_find_all_empty`: empty store lists nothing
//! - `test_find_all_multiple`: every created author is listed
//! - `test_update_partial`: only supplied fields change
//! - `test_update_missing_row`: update after delete is `RowMissing`
//! - `test_delete_existing`: delete then find returns None
//! - `test_delete_missing_row`: second delete is `RowMissing`
//!
//! ## Ordering
//! - `test_find_all_alphabetical`: last name, then first name
//! - `test_ids_are_unique`: ids never repeat, even after delete
//!
//! ## Concurrency
//! - `test_concurrent_creates`: parallel creates from spawned tasks

/// Generate a full `AuthorService` conformance test suite.
///
/// `$factory` must evaluate to a value implementing `AuthorService`. It is
/// re-evaluated for each test; backends sharing a database are expected to
/// return an empty store every time.
#[macro_export]
macro_rules! author_service_tests {
    ($factory:expr) => {
        mod author_service_contract_tests {
            use super::*;
            use authors::core::error::StorageError;
            use authors::core::service::AuthorService;
            use authors::entities::author::AuthorChanges;
            use std::collections::HashSet;
            use std::sync::Arc;

            // ==================================================================
            // CRUD: Create & Find
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_find() {
                let service = $factory;

                let created = service.create(new_author("Jane", "Austen")).await.unwrap();
                assert!(created.id > 0);
                assert_eq!(created.first_name, "Jane");
                assert_eq!(created.last_name, "Austen");
                assert_eq!(created.created_at, created.updated_at);

                let found = service.find_by_id(created.id).await.unwrap();
                let found = found.expect("author should exist after create");
                assert_eq!(found.id, created.id);
                assert_eq!(found.name(), "Austen, Jane");
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let service = $factory;

                let result = service.find_by_id(987_654).await.unwrap();
                assert!(result.is_none(), "unknown id should return None");
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let service = $factory;

                assert!(service.find_all().await.unwrap().is_empty());
                assert_eq!(service.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let service = $factory;
                seed(&service).await;

                let all = service.find_all().await.unwrap();
                assert_eq!(all.len(), unsorted_names().len());
                assert_eq!(service.count().await.unwrap(), all.len());

                let listed: HashSet<(String, String)> = all
                    .iter()
                    .map(|a| (a.first_name.clone(), a.last_name.clone()))
                    .collect();
                for (first_name, last_name) in unsorted_names() {
                    assert!(
                        listed.contains(&(first_name.to_string(), last_name.to_string())),
                        "{} {} should be listed",
                        first_name,
                        last_name
                    );
                }
            }

            // ==================================================================
            // CRUD: Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_partial() {
                let service = $factory;
                let created = service.create(new_author("Jane", "Austen")).await.unwrap();

                let changes = AuthorChanges {
                    first_name: Some("J.".to_string()),
                    last_name: None,
                };
                let updated = service.update(&created, changes).await.unwrap();
                assert_eq!(updated.first_name, "J.");
                assert_eq!(updated.last_name, "Austen");
                assert!(updated.updated_at >= created.updated_at);
                assert_eq!(updated.created_at, created.created_at);

                let found = service.find_by_id(created.id).await.unwrap().unwrap();
                assert_eq!(found.first_name, "J.");
                assert_eq!(found.last_name, "Austen");
            }

            #[tokio::test]
            async fn test_update_missing_row() {
                let service = $factory;
                let created = service.create(new_author("Jane", "Austen")).await.unwrap();
                service.delete(&created).await.unwrap();

                let changes = AuthorChanges {
                    first_name: Some("J.".to_string()),
                    last_name: None,
                };
                let result = service.update(&created, changes).await;
                assert!(
                    matches!(result, Err(StorageError::RowMissing { id, .. }) if id == created.id),
                    "update of a removed author should be RowMissing"
                );
            }

            // ==================================================================
            // CRUD: Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let created = service.create(new_author("Jane", "Austen")).await.unwrap();

                service.delete(&created).await.unwrap();

                assert!(service.find_by_id(created.id).await.unwrap().is_none());
                assert_eq!(service.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_delete_missing_row() {
                let service = $factory;
                let created = service.create(new_author("Jane", "Austen")).await.unwrap();
                service.delete(&created).await.unwrap();

                let result = service.delete(&created).await;
                assert!(matches!(result, Err(StorageError::RowMissing { .. })));
            }

            // ==================================================================
            // Ordering
            // ==================================================================

            #[tokio::test]
            async fn test_find_all_alphabetical() {
                let service = $factory;
                seed(&service).await;

                let names: Vec<(String, String)> = service
                    .find_all_alphabetical()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|a| (a.first_name, a.last_name))
                    .collect();
                let expected: Vec<(String, String)> = sorted_names()
                    .into_iter()
                    .map(|(f, l)| (f.to_string(), l.to_string()))
                    .collect();
                assert_eq!(names, expected);
            }

            #[tokio::test]
            async fn test_ids_are_unique() {
                let service = $factory;
                let first = service.create(new_author("Jane", "Austen")).await.unwrap();
                service.delete(&first).await.unwrap();
                let second = service.create(new_author("Jane", "Austen")).await.unwrap();

                assert_ne!(first.id, second.id, "ids must not be reused");
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let service: Arc<dyn AuthorService> = Arc::new($factory);

                let mut handles = Vec::new();
                for i in 0..10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .create(new_author(&format!("First{}", i), "Concurrent"))
                            .await
                            .unwrap()
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap().id);
                }

                assert_eq!(ids.len(), 10, "every create should get its own id");
                assert_eq!(service.count().await.unwrap(), 10);
            }
        }
    };
}
