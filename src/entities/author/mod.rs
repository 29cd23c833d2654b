//! Author entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod params;

pub use descriptor::AuthorDescriptor;
pub use handlers::AuthorAppState;
pub use model::{Author, AuthorChanges, NewAuthor, not_blank, sort_alphabetical};
pub use params::{AuthorOrder, CreateAuthorParams, ListAuthorsQuery, UpdateAuthorParams};

use crate::core::module::Module;
use crate::core::service::AuthorService;
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Module exposing the authors resource
pub struct AuthorsModule {
    service: Arc<dyn AuthorService>,
}

impl AuthorsModule {
    pub fn new(service: Arc<dyn AuthorService>) -> Self {
        Self { service }
    }
}

impl Module for AuthorsModule {
    fn name(&self) -> &str {
        "authors"
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["author"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(AuthorDescriptor::new(self.service.clone())));
    }
}
