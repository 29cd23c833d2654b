//! Entity descriptor for Author

use super::handlers::{
    AuthorAppState, create_author, delete_author, get_author, list_authors, update_author,
};
use super::model::Author;
use crate::core::entity::Entity;
use crate::core::service::AuthorService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Author entity
pub struct AuthorDescriptor {
    pub service: Arc<dyn AuthorService>,
}

impl AuthorDescriptor {
    pub fn new(service: Arc<dyn AuthorService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for AuthorDescriptor {
    fn entity_type(&self) -> &str {
        Author::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Author::resource_name()
    }

    fn build_routes(&self) -> Router {
        let state = AuthorAppState::new(self.service.clone());

        Router::new()
            .route(
                &Author::collection_path(),
                get(list_authors).post(create_author),
            )
            .route(
                &Author::member_path(),
                get(get_author)
                    .put(update_author)
                    .patch(update_author)
                    .delete(delete_author),
            )
            .with_state(state)
    }
}
