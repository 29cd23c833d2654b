//! # Authors API
//!
//! A small REST service managing authors, built on axum.
//!
//! ## Features
//!
//! - **CRUD Routes**: list, show, create, update and delete under `/authors`
//! - **Whitelisted Parameters**: only `first_name` and `last_name` are accepted
//! - **Form or JSON Bodies**: `application/x-www-form-urlencoded` and `application/json`
//! - **OpenAPI Docs**: generated from handler annotations, served with Swagger UI
//! - **Pluggable Storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use authors::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let service = Arc::new(InMemoryAuthorService::new());
//!
//!     ServerBuilder::new()
//!         .register_module(AuthorsModule::new(service))?
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::Entity,
        error::{ApiError, ErrorResponse, StorageError},
        extractors::Payload,
        module::Module,
        service::AuthorService,
    };

    // === Authors ===
    pub use crate::entities::author::{
        Author, AuthorAppState, AuthorChanges, AuthorOrder, AuthorsModule, CreateAuthorParams,
        NewAuthor, UpdateAuthorParams,
    };

    // === Storage ===
    pub use crate::storage::InMemoryAuthorService;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresAuthorService;

    // === Config ===
    pub use crate::config::{
        AppConfig, ConfigOverrides, DocsConfig, LogConfig, StorageBackend, StorageConfig,
    };

    // === Server ===
    pub use crate::server::{ApiDoc, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
