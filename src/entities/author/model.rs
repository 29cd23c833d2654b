//! Author entity model with validation

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// A persisted author
///
/// `id` and both timestamps are assigned by the storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[schema(example = json!({
    "id": 1,
    "first_name": "Jane",
    "last_name": "Austen",
    "created_at": "2024-01-01T00:00:00Z",
    "updated_at": "2024-01-01T00:00:00Z"
}))]
pub struct Author {
    /// Author ID
    pub id: i64,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Display name, "{last_name}, {first_name}"
    pub fn name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Alphabetical ordering: last name, then first name
    pub fn cmp_alphabetical(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

/// Sort authors alphabetically in place
pub fn sort_alphabetical(authors: &mut [Author]) {
    authors.sort_by(Author::cmp_alphabetical);
}

impl Entity for Author {
    fn resource_name() -> &'static str {
        "authors"
    }

    fn resource_name_singular() -> &'static str {
        "author"
    }
}

/// Attributes of an author about to be created
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAuthor {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

impl NewAuthor {
    /// Build and validate a new author
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let author = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        };
        author.validate()?;
        Ok(author)
    }
}

/// Partial update of an author; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorChanges {
    /// True when the update touches no field
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Apply the supplied fields to `author`
    pub fn apply_to(&self, author: &mut Author) {
        if let Some(first_name) = &self.first_name {
            author.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            author.last_name.clone_from(last_name);
        }
    }
}

// Only supplied fields are checked.
impl Validate for AuthorChanges {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(Err(err)) = self.first_name.as_deref().map(not_blank) {
            errors.add("first_name", err);
        }
        if let Some(Err(err)) = self.last_name.as_deref().map(not_blank) {
            errors.add("last_name", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Presence check: rejects empty and whitespace-only values
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("can't be blank"));
        return Err(err);
    }
    Ok(())
}
