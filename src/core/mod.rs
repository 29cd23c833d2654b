//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod extractors;
pub mod module;
pub mod service;

pub use entity::Entity;
pub use error::{ApiError, ErrorResponse, StorageError};
pub use extractors::Payload;
pub use module::Module;
pub use service::AuthorService;
