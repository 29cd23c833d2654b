//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryAuthorService;
#[cfg(feature = "postgres")]
pub use postgres::PostgresAuthorService;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::service::AuthorService;
use anyhow::Result;
use std::sync::Arc;

/// Build the author service selected by `config`
///
/// The PostgreSQL backend creates its table on first connect.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn AuthorService>> {
    match config.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory author storage");
            Ok(Arc::new(InMemoryAuthorService::new()))
        }
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url is required for the postgres backend")
            })?;
            let service = PostgresAuthorService::connect(url, config.max_connections).await?;
            service.ensure_schema().await?;
            tracing::info!(
                max_connections = config.max_connections,
                "Using PostgreSQL author storage"
            );
            Ok(Arc::new(service))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => Err(anyhow::anyhow!(
            "the postgres backend requires building with `--features postgres`"
        )),
    }
}
