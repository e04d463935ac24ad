//! Process wiring for the Pessoas server: configuration, backend selection
//! and the top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use pessoas_core::{MemoryStore, Person, Registry, store::PersonStore};
use pessoas_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Which [`PersonStore`] implementation backs the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
  Memory,
  Sqlite,
}

impl BackendKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Memory => "memory",
      Self::Sqlite => "sqlite",
    }
  }
}

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub backend:       BackendKind,
  /// Only read when `backend` is `sqlite`.
  pub database_path: PathBuf,
}

/// Layer defaults, the optional TOML file at `path`, and `PESSOAS_*`
/// environment variables, in increasing precedence. `backend` wins over all
/// of them when given.
pub fn load_config(
  path: &Path,
  backend: Option<BackendKind>,
) -> Result<ServerConfig, config::ConfigError> {
  let mut builder = config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 9999)?
    .set_default("backend", BackendKind::Memory.as_str())?
    .set_default("database_path", "pessoas.db")?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("PESSOAS"));

  if let Some(kind) = backend {
    builder = builder.set_override("backend", kind.as_str())?;
  }

  builder.build()?.try_deserialize()
}

// ─── Backend ──────────────────────────────────────────────────────────────────

/// The store chosen at startup. Handlers are instantiated once, for this
/// type, whichever variant is live.
pub enum Backend {
  Memory(MemoryStore),
  Sqlite(SqliteStore),
}

impl Backend {
  pub async fn open(config: &ServerConfig) -> pessoas_store_sqlite::Result<Self> {
    Ok(match config.backend {
      BackendKind::Memory => Self::Memory(MemoryStore::new()),
      BackendKind::Sqlite => {
        Self::Sqlite(SqliteStore::open(&config.database_path).await?)
      }
    })
  }
}

impl PersonStore for Backend {
  type Error = pessoas_core::Error;

  async fn create(&self, person: &Person) -> pessoas_core::Result<()> {
    match self {
      Self::Memory(s) => s.create(person).await,
      Self::Sqlite(s) => Ok(s.create(person).await?),
    }
  }

  async fn get(&self, id: Uuid) -> pessoas_core::Result<Option<Person>> {
    match self {
      Self::Memory(s) => s.get(id).await,
      Self::Sqlite(s) => Ok(s.get(id).await?),
    }
  }

  async fn search(&self, pattern: &str) -> pessoas_core::Result<Vec<Person>> {
    match self {
      Self::Memory(s) => s.search(pattern).await,
      Self::Sqlite(s) => Ok(s.search(pattern).await?),
    }
  }

  async fn count(&self) -> pessoas_core::Result<u64> {
    match self {
      Self::Memory(s) => s.count().await,
      Self::Sqlite(s) => Ok(s.count().await?),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with request logging applied.
pub fn router<S>(registry: Arc<Registry<S>>) -> Router
where
  S: PersonStore + 'static,
{
  pessoas_api::api_router(registry).layer(TraceLayer::new_for_http())
}
