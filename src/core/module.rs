//! Module system
//!
//! A module groups the entities it exposes and registers their route
//! descriptors with the server.

use crate::server::entity_registry::EntityRegistry;

/// Trait for service modules
pub trait Module: Send + Sync {
    /// Unique name of this module
    fn name(&self) -> &str;

    /// Version of this module
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register entity descriptors for this module
    fn register_entities(&self, registry: &mut EntityRegistry);
}
