//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for all entities declared in modules
//! - Health check routes
//! - The OpenAPI document and Swagger UI

pub mod builder;
pub mod docs;
pub mod entity_registry;

pub use builder::{HEALTH_PATHS, ServerBuilder};
pub use docs::{ApiDoc, OPENAPI_JSON_PATH};
pub use entity_registry::{EntityDescriptor, EntityRegistry};
