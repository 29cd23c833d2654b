//! Entity registry collecting route descriptors from registered modules

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Each exposed entity implements this trait to provide its CRUD routes:
/// - GET /{plural}
/// - POST /{plural}
/// - GET /{plural}/{id}
/// - PUT /{plural}/{id}
/// - DELETE /{plural}/{id}
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "author")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "authors")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity, with state already attached
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
///
/// Descriptors are keyed by singular entity type; registering the same type
/// twice replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(
            entity_type = %entity_type,
            plural = descriptor.plural(),
            "registered entity routes"
        );
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Plural resource names, sorted by entity type
    pub fn resources(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.plural()).collect()
    }

    /// Whether `entity_type` has been registered
    pub fn contains(&self, entity_type: &str) -> bool {
        self.descriptors.contains_key(entity_type)
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
