//! Author HTTP handlers
//!
//! ```text
//! GET    /authors[?sort=alphabetical]
//! POST   /authors        first_name=Jane&last_name=Austen
//! GET    /authors/{id}
//! PUT    /authors/{id}   first_name=J.
//! DELETE /authors/{id}
//! ```
//!
//! Show, update and delete resolve the id before touching the body or the
//! store, so an unknown id always answers 404 and mutates nothing.

use super::model::{Author, AuthorChanges, NewAuthor};
use super::params::{AuthorOrder, CreateAuthorParams, ListAuthorsQuery, UpdateAuthorParams};
use crate::core::error::{ApiError, ErrorResponse};
use crate::core::extractors::Payload;
use crate::core::service::AuthorService;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Author-specific AppState
#[derive(Clone)]
pub struct AuthorAppState {
    pub service: Arc<dyn AuthorService>,
}

impl AuthorAppState {
    pub fn new(service: Arc<dyn AuthorService>) -> Self {
        Self { service }
    }

    /// Resolve an id to a stored author, or 404
    async fn load(&self, id: i64) -> Result<Author, ApiError> {
        self.service
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found::<Author>(id))
    }
}

fn author_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::malformed(rejection.body_text()))
}

/// Fetches all Authors
///
/// This lists all the authors
#[utoipa::path(
    get,
    path = "/authors",
    params(ListAuthorsQuery),
    responses(
        (status = 200, description = "All authors", body = [Author]),
        (status = 406, description = "Malformed query", body = ErrorResponse)
    ),
    tag = "authors",
    operation_id = "listAuthors"
)]
pub async fn list_authors(
    State(state): State<AuthorAppState>,
    query: Result<Query<ListAuthorsQuery>, QueryRejection>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::malformed(rejection.body_text()))?;

    let authors = match query.sort {
        Some(AuthorOrder::Alphabetical) => state.service.find_all_alphabetical().await?,
        None => state.service.find_all().await?,
    };

    tracing::debug!(count = authors.len(), "listed authors");
    Ok(Json(authors))
}

/// Shows one Author
///
/// This lists details of one author
#[utoipa::path(
    get,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "The author", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 406, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "authors",
    operation_id = "showAuthor"
)]
pub async fn get_author(
    State(state): State<AuthorAppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Author>, ApiError> {
    let id = author_id(path)?;
    let author = state.load(id).await?;

    tracing::debug!(author_id = id, "fetched author");
    Ok(Json(author))
}

/// Creates a new Author
///
/// Both `first_name` and `last_name` are required; any other field is ignored.
#[utoipa::path(
    post,
    path = "/authors",
    request_body(
        content = CreateAuthorParams,
        content_type = "application/x-www-form-urlencoded",
        description = "First name and last name"
    ),
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 406, description = "Missing or blank name", body = ErrorResponse)
    ),
    tag = "authors",
    operation_id = "createAuthor"
)]
pub async fn create_author(
    State(state): State<AuthorAppState>,
    Payload(params): Payload<CreateAuthorParams>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let attrs = NewAuthor::try_from(params)?;
    let author = state.service.create(attrs).await?;

    tracing::info!(author_id = author.id, name = %author.name(), "created author");
    Ok((StatusCode::CREATED, Json(author)))
}

/// Updates an existing Author
///
/// Only the supplied fields change; each supplied name must not be blank.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author Id")),
    request_body(
        content = UpdateAuthorParams,
        content_type = "application/x-www-form-urlencoded",
        description = "Optional first name and last name"
    ),
    responses(
        (status = 204, description = "Author updated"),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 406, description = "Malformed id or blank name", body = ErrorResponse)
    ),
    tag = "authors",
    operation_id = "updateAuthor"
)]
pub async fn update_author(
    State(state): State<AuthorAppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Payload<UpdateAuthorParams>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let id = author_id(path)?;
    let author = state.load(id).await?;

    let Payload(params) = payload?;
    let changes = AuthorChanges::try_from(params)?;
    if changes.is_empty() {
        tracing::debug!(author_id = id, "update without changes");
        return Ok(StatusCode::NO_CONTENT);
    }

    state.service.update(&author, changes).await?;

    tracing::info!(author_id = id, "updated author");
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an existing Author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author Id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 406, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "authors",
    operation_id = "deleteAuthor"
)]
pub async fn delete_author(
    State(state): State<AuthorAppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = author_id(path)?;
    let author = state.load(id).await?;

    state.service.delete(&author).await?;

    tracing::info!(author_id = id, "deleted author");
    Ok(StatusCode::NO_CONTENT)
}
