//! Entity trait defining the core abstraction for persisted records

/// Base trait for all entities exposed by the service.
///
/// Entities are plain data. Identity and timestamps are filled in by the
/// storage adapter, never by the entity itself.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "authors")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "author")
    fn resource_name_singular() -> &'static str;

    /// Collection path for this entity (e.g., "/authors")
    fn collection_path() -> String {
        format!("/{}", Self::resource_name())
    }

    /// Member path template for this entity (e.g., "/authors/{id}")
    fn member_path() -> String {
        format!("/{}/{{id}}", Self::resource_name())
    }
}
