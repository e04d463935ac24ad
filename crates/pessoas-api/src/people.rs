//! Handlers for the `/pessoas` and `/contagem-pessoas` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/pessoas` | Body: [`NewPerson`]; returns 201 + `Location` + stored person |
//! | `GET`  | `/pessoas/:id` | 404 if the id is unknown or not a UUID |
//! | `GET`  | `/pessoas?t=<pattern>` | 400 on empty pattern; 404 with `[]` on no match |
//! | `GET`  | `/contagem-pessoas` | `{"count": n}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use pessoas_core::{NewPerson, Person, Registry, store::PersonStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Path at which a created person can be fetched.
pub fn location(id: Uuid) -> String { format!("/pessoas/{id}") }

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /pessoas` — returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(registry): State<Arc<Registry<S>>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore + 'static,
{
  let Json(input) = body.inspect_err(|e| tracing::debug!("rejected body: {e}"))?;

  let person = registry.create(input).await.inspect_err(|e| {
    if !matches!(e, pessoas_core::Error::Storage(_)) {
      tracing::debug!("create refused: {e}");
    }
  })?;

  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location(person.id))],
    Json(person),
  ))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /pessoas/:id`
///
/// The id is taken as a raw string so that a malformed one is reported as
/// "not found" rather than as a path-extraction failure.
pub async fn get_one<S>(
  State(registry): State<Arc<Registry<S>>>,
  Path(raw_id): Path<String>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore + 'static,
{
  let id = Uuid::parse_str(&raw_id)
    .map_err(|_| ApiError::NotFound(format!("person not found: {raw_id}")))?;
  Ok(Json(registry.get(id).await?))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  /// The search term.
  pub t: Option<String>,
}

/// `GET /pessoas?t=<pattern>`
pub async fn search<S>(
  State(registry): State<Arc<Registry<S>>>,
  Query(params): Query<SearchParams>,
) -> Result<Response, ApiError>
where
  S: PersonStore + 'static,
{
  let people = registry.search(params.t.as_deref().unwrap_or_default()).await?;

  // No match keeps the collection shape but signals 404.
  let status = if people.is_empty() {
    StatusCode::NOT_FOUND
  } else {
    StatusCode::OK
  };
  Ok((status, Json(people)).into_response())
}

// ─── Count ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
  pub count: u64,
}

/// `GET /contagem-pessoas`
pub async fn count<S>(
  State(registry): State<Arc<Registry<S>>>,
) -> Result<Json<CountResponse>, ApiError>
where
  S: PersonStore + 'static,
{
  Ok(Json(CountResponse {
    count: registry.count().await?,
  }))
}
