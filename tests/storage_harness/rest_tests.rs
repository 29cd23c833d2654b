//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run a
//! backend through the real router:
//! request → `Payload` → handler → `AuthorService` → JSON response.

/// Generate a REST integration test suite for a storage backend.
///
/// `$factory` must produce an `impl AuthorService + 'static` backed by an
/// empty store.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_create`: POST 201 + created author
/// - `test_rest_show`: GET 200 + stored author
/// - `test_rest_list`: GET 200 + every author
/// - `test_rest_list_alphabetical`: `?sort=alphabetical` ordering
/// - `test_rest_update`: PUT 204, then GET shows the change
/// - `test_rest_update_empty_body`: bodiless PUT is 204 with or without a
///   content type, and changes nothing
/// - `test_rest_delete`: DELETE 204, then GET 404
///
/// ## Error handling
/// - `test_rest_create_missing_name`: POST without last name → 406
/// - `test_rest_not_found`: GET, PUT and DELETE on an unknown id → 404
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use authors::core::service::AuthorService;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let service: Arc<dyn AuthorService> = Arc::new($factory);
                TestServer::try_new(build_test_router(service)).unwrap()
            }

            async fn create(server: &TestServer, first_name: &str, last_name: &str) -> Value {
                let response = server
                    .post("/authors")
                    .json(&json!({ "first_name": first_name, "last_name": last_name }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/authors")
                    .form(&[("first_name", "Jane"), ("last_name", "Austen")])
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert!(body["id"].as_i64().is_some());
                assert_eq!(body["first_name"], "Jane");
                assert_eq!(body["last_name"], "Austen");
                assert!(body["created_at"].is_string());
                assert!(body["updated_at"].is_string());
            }

            #[tokio::test]
            async fn test_rest_show() {
                let server = make_server().await;
                let created = create(&server, "Jane", "Austen").await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/authors/{}", id)).await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;
                for (first_name, last_name) in unsorted_names() {
                    create(&server, first_name, last_name).await;
                }

                let response = server.get("/authors").await;

                response.assert_status_ok();
                let body: Vec<Value> = response.json();
                assert_eq!(body.len(), unsorted_names().len());
            }

            #[tokio::test]
            async fn test_rest_list_alphabetical() {
                let server = make_server().await;
                for (first_name, last_name) in unsorted_names() {
                    create(&server, first_name, last_name).await;
                }

                let response = server
                    .get("/authors")
                    .add_query_param("sort", "alphabetical")
                    .await;

                response.assert_status_ok();
                let body: Vec<Value> = response.json();
                let names: Vec<(String, String)> = body
                    .iter()
                    .map(|a| {
                        (
                            a["first_name"].as_str().unwrap().to_string(),
                            a["last_name"].as_str().unwrap().to_string(),
                        )
                    })
                    .collect();
                let expected: Vec<(String, String)> = sorted_names()
                    .into_iter()
                    .map(|(f, l)| (f.to_string(), l.to_string()))
                    .collect();
                assert_eq!(names, expected);
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let created = create(&server, "Jane", "Austen").await;
                let path = format!("/authors/{}", created["id"]);

                let response = server.put(&path).form(&[("first_name", "J.")]).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());

                let body: Value = server.get(&path).await.json();
                assert_eq!(body["first_name"], "J.");
                assert_eq!(body["last_name"], "Austen");
            }

            #[tokio::test]
            async fn test_rest_update_empty_body() {
                let server = make_server().await;
                let created = create(&server, "Jane", "Austen").await;
                let path = format!("/authors/{}", created["id"]);

                server
                    .put(&path)
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
                server
                    .put(&path)
                    .content_type("application/json")
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
                server
                    .put(&path)
                    .content_type("application/x-www-form-urlencoded")
                    .await
                    .assert_status(StatusCode::NO_CONTENT);

                let body: Value = server.get(&path).await.json();
                assert_eq!(body["first_name"], "Jane");
                assert_eq!(body["last_name"], "Austen");
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(&server, "Jane", "Austen").await;
                let path = format!("/authors/{}", created["id"]);

                server
                    .delete(&path)
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
                server.get(&path).await.assert_status_not_found();

                let body: Vec<Value> = server.get("/authors").await.json();
                assert!(body.is_empty());
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_missing_name() {
                let server = make_server().await;

                let response = server
                    .post("/authors")
                    .form(&[("first_name", "Jane")])
                    .await;

                response.assert_status(StatusCode::NOT_ACCEPTABLE);
                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_FAILED");
                assert!(body["details"]["fields"]["last_name"].is_array());

                let list: Vec<Value> = server.get("/authors").await.json();
                assert!(list.is_empty(), "nothing should be stored");
            }

            #[tokio::test]
            async fn test_rest_not_found() {
                let server = make_server().await;

                server
                    .get("/authors/987654")
                    .await
                    .assert_status_not_found();
                server
                    .put("/authors/987654")
                    .form(&[("first_name", "J.")])
                    .await
                    .assert_status_not_found();
                server
                    .delete("/authors/987654")
                    .await
                    .assert_status_not_found();
            }
        }
    };
}
