//! Axum extractors for request bodies
//!
//! [`Payload<T>`] accepts either form-encoded or JSON bodies and turns every
//! rejection into an [`ApiError`], so handlers answer 406 instead of axum's
//! default 400/415/422 responses.

use crate::core::error::ApiError;
use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

const JSON_MIME: &str = "application/json";
const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Request body deserialized from `application/x-www-form-urlencoded` or
/// `application/json`
///
/// An empty body yields `T::default()` whatever the content type.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_author(
///     Payload(params): Payload<CreateAuthorParams>,
/// ) -> Result<Json<Author>, ApiError> {
///     // params only carries whitelisted fields
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let headers = req.headers().clone();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
        if body.is_empty() {
            return Ok(Payload(T::default()));
        }

        let mut req = Request::new(Body::from(body));
        *req.method_mut() = method;
        *req.headers_mut() = headers;

        match content_type.as_deref() {
            Some(mime) if mime.starts_with(JSON_MIME) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
                Ok(Payload(value))
            }
            Some(mime) if mime.starts_with(FORM_MIME) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
                Ok(Payload(value))
            }
            None => Err(ApiError::malformed("missing Content-Type header")),
            Some(other) => Err(ApiError::malformed(format!(
                "unsupported Content-Type '{}'",
                other
            ))),
        }
    }
}
