//! ServerBuilder for fluent API to build HTTP servers

use super::docs::{OPENAPI_JSON_PATH, docs_routes};
use super::entity_registry::EntityRegistry;
use crate::config::DocsConfig;
use crate::core::module::Module;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Liveness routes mounted on every server
pub const HEALTH_PATHS: [&str; 2] = ["/health", "/healthz"];

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register_module(AuthorsModule::new(Arc::new(InMemoryAuthorService::new())))?
///     .build()?;
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    docs: DocsConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            docs: DocsConfig::default(),
        }
    }

    /// Configure API documentation routes
    ///
    /// The OpenAPI document is always served; Swagger UI only when
    /// `docs.enabled` is set.
    pub fn with_docs(mut self, docs: DocsConfig) -> Self {
        self.docs = docs;
        self
    }

    /// Register a module
    ///
    /// This registers all entities from the module and checks that every
    /// declared entity type ended up with routes.
    pub fn register_module(mut self, module: impl Module) -> Result<Self> {
        if module.entity_types().is_empty() {
            anyhow::bail!("module '{}' declares no entity types", module.name());
        }

        module.register_entities(&mut self.entity_registry);

        for entity_type in module.entity_types() {
            if !self.entity_registry.contains(entity_type) {
                anyhow::bail!(
                    "module '{}' declares entity '{}' but registered no routes for it",
                    module.name(),
                    entity_type
                );
            }
        }

        tracing::info!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "registered module"
        );

        Ok(self)
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - Health check routes
    /// - CRUD routes for all registered entities
    /// - OpenAPI document (and Swagger UI when enabled)
    ///
    /// Fails when Swagger UI would be mounted over another route.
    pub fn build(self) -> Result<Router> {
        if self.entity_registry.is_empty() {
            anyhow::bail!("no module registered. Call .register_module()");
        }

        if self.docs.enabled {
            let mut routes: Vec<String> = self
                .entity_registry
                .resources()
                .into_iter()
                .map(|plural| format!("/{}", plural))
                .collect();
            routes.extend(HEALTH_PATHS.iter().map(|path| path.to_string()));
            routes.push(OPENAPI_JSON_PATH.to_string());

            if let Some(route) = routes.iter().find(|route| self.docs.collides_with(route)) {
                anyhow::bail!(
                    "docs path '{}' overlaps the '{}' route",
                    self.docs.path,
                    route
                );
            }
        }

        let app = Self::health_routes()
            .merge(self.entity_registry.build_routes())
            .merge(docs_routes(&self.docs));

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        HEALTH_PATHS
            .iter()
            .fold(Router::new(), |router, path| router.route(path, get(health_check)))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
