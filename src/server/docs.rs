//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects the per-operation metadata declared on each author
//! handler (summary, notes, parameters, response codes) into one OpenAPI
//! document at compile time. It is served as JSON at [`OPENAPI_JSON_PATH`],
//! optionally with Swagger UI, and can be dumped with
//! `cargo run --bin openapi-dump`.

use crate::config::DocsConfig;
use crate::core::error::ErrorResponse;
use crate::entities::author::{Author, AuthorOrder, CreateAuthorParams, UpdateAuthorParams};
use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Route serving the OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Authors Management",
        description = "CRUD operations on authors.",
        license(name = "MIT OR Apache-2.0")
    ),
    paths(
        crate::entities::author::handlers::list_authors,
        crate::entities::author::handlers::get_author,
        crate::entities::author::handlers::create_author,
        crate::entities::author::handlers::update_author,
        crate::entities::author::handlers::delete_author,
    ),
    components(schemas(
        Author,
        AuthorOrder,
        CreateAuthorParams,
        UpdateAuthorParams,
        ErrorResponse
    )),
    tags(
        (name = "authors", description = "Authors Management")
    )
)]
pub struct ApiDoc;

/// Routes exposing the OpenAPI document, plus Swagger UI when enabled
pub fn docs_routes(config: &DocsConfig) -> Router {
    if config.enabled {
        SwaggerUi::new(config.path.clone())
            .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
            .into()
    } else {
        Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
    }
}
