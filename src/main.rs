//! Authors API server
//!
//! Reads configuration from an optional YAML file plus command-line and
//! environment overrides, picks the storage backend and serves the REST API
//! until SIGTERM or Ctrl+C.

use anyhow::Result;
use authors::config::{AppConfig, ConfigOverrides, LogConfig};
use authors::entities::AuthorsModule;
use authors::server::{OPENAPI_JSON_PATH, ServerBuilder};
use authors::storage;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Parser)]
#[command(name = "authors-api", about = "Serve the authors REST API", version)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.overrides)?;
    init_tracing(&config.log);

    let service = storage::connect(&config.storage).await?;
    let module = AuthorsModule::new(service);

    tracing::info!(
        backend = ?config.storage.backend,
        openapi = OPENAPI_JSON_PATH,
        swagger_ui = ?config.docs.enabled.then_some(config.docs.path.as_str()),
        "starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_docs(config.docs.clone())
        .register_module(module)?
        .serve(&config.server.address())
        .await
}

/// `RUST_LOG` wins over the configured filter
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let result = if log.json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
