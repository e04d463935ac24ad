//! pessoas server binary.
//!
//! Reads `pessoas.toml` (or the path given with `--config`), opens the
//! configured store, and serves the registry over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use pessoas_core::Registry;
use pessoas_server::{Backend, BackendKind, load_config};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Pessoas person registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "pessoas.toml")]
  config: PathBuf,

  /// Override the configured storage backend.
  #[arg(long, value_enum)]
  backend: Option<BackendKind>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config, cli.backend)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  // A store that cannot be opened is fatal; nothing is served.
  let backend = Backend::open(&server_cfg).await.with_context(|| {
    format!(
      "failed to open {} store at {:?}",
      server_cfg.backend.as_str(),
      server_cfg.database_path
    )
  })?;
  tracing::info!(backend = server_cfg.backend.as_str(), "store ready");

  let app = pessoas_server::router(Arc::new(Registry::new(backend)));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
