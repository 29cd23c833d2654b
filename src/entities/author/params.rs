//! Whitelisted request parameters for the authors resource
//!
//! Only `first_name` and `last_name` are declared; anything else a client
//! sends is dropped during deserialization and never reaches validation or
//! storage.

use super::model::{AuthorChanges, NewAuthor};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

/// Form parameters for `POST /authors`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAuthorParams {
    /// First name
    #[serde(default)]
    #[schema(required = true, example = "Jane")]
    pub first_name: String,

    /// Last name
    #[serde(default)]
    #[schema(required = true, example = "Austen")]
    pub last_name: String,
}

impl TryFrom<CreateAuthorParams> for NewAuthor {
    type Error = ValidationErrors;

    fn try_from(params: CreateAuthorParams) -> Result<Self, Self::Error> {
        NewAuthor::new(params.first_name, params.last_name)
    }
}

/// Form parameters for `PUT /authors/{id}`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAuthorParams {
    /// First name
    #[schema(example = "J.")]
    pub first_name: Option<String>,

    /// Last name
    #[schema(example = "Austen-Leigh")]
    pub last_name: Option<String>,
}

impl TryFrom<UpdateAuthorParams> for AuthorChanges {
    type Error = ValidationErrors;

    fn try_from(params: UpdateAuthorParams) -> Result<Self, Self::Error> {
        let changes = AuthorChanges {
            first_name: params.first_name,
            last_name: params.last_name,
        };
        changes.validate()?;
        Ok(changes)
    }
}

/// Ordering accepted by `GET /authors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthorOrder {
    /// Last name, then first name
    Alphabetical,
}

/// Query parameters for `GET /authors`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAuthorsQuery {
    /// Optional ordering; storage order when omitted
    #[param(inline)]
    pub sort: Option<AuthorOrder>,
}
