//! Typed error handling for the authors service
//!
//! Every failure a handler can produce is an [`ApiError`], translated into an
//! HTTP status and a JSON [`ErrorResponse`] at the handler boundary.
//!
//! # Error Categories
//!
//! - [`ApiError::NotFound`]: the requested id does not exist (404)
//! - [`ApiError::Validation`]: a name field is missing or blank (406)
//! - [`ApiError::MalformedRequest`]: the id or body cannot be parsed (406)
//! - [`ApiError::Storage`]: the storage backend failed (500)
//!
//! # Example
//!
//! ```rust,ignore
//! use authors::prelude::*;
//!
//! async fn load(service: &dyn AuthorService, id: i64) -> Result<Author, ApiError> {
//!     service
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| ApiError::not_found::<Author>(id))
//! }
//! ```

use crate::core::entity::Entity;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// The main error type returned by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: i64 },

    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Path, query or body could not be parsed
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    /// Storage backend errors
    #[error(transparent)]
    Storage(StorageError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Not-found error for an entity of type `T`
    pub fn not_found<T: Entity>(id: i64) -> Self {
        ApiError::NotFound {
            entity_type: T::resource_name_singular(),
            id,
        }
    }

    /// Malformed request error with the given message
    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::MalformedRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::MalformedRequest { .. } => StatusCode::NOT_ACCEPTABLE,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { entity_type, id } => Some(serde_json::json!({
                "entity_type": entity_type,
                "id": id
            })),
            ApiError::Validation(errors) => Some(serde_json::json!({ "fields": errors })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), error = %self, "request rejected");
        }

        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by storage adapters
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The row disappeared between lookup and mutation
    #[error("{entity_type} with id '{id}' no longer exists")]
    RowMissing { entity_type: &'static str, id: i64 },

    /// A lock guarding in-memory state was poisoned
    #[error("Failed to acquire {kind} lock on {store} store")]
    LockPoisoned {
        store: &'static str,
        kind: &'static str,
    },

    /// The backend reported an error
    #[error("{backend} backend error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::RowMissing { entity_type, id } => ApiError::NotFound { entity_type, id },
            other => ApiError::Storage(other),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Backend {
            backend: "PostgreSQL",
            message: err.to_string(),
        }
    }
}
