//! JSON HTTP API for the Pessoas registry.
//!
//! Exposes an axum [`Router`] backed by a [`Registry`] over any
//! [`PersonStore`]. Request logging and transport concerns are the caller's
//! responsibility.

pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use pessoas_core::{Registry, store::PersonStore};

pub use error::ApiError;

/// Build the API router for `registry`.
///
/// The returned `Router<()>` can be nested or layered by the caller
/// regardless of its own state type.
pub fn api_router<S>(registry: Arc<Registry<S>>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/pessoas",
      get(people::search::<S>).post(people::create::<S>),
    )
    .route("/pessoas/{id}", get(people::get_one::<S>))
    .route("/contagem-pessoas", get(people::count::<S>))
    .with_state(registry)
}

#[cfg(test)]
mod tests;
