//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The body parsed as JSON but a field had the wrong type or was missing.
  #[error("malformed input: {0}")]
  MalformedInput(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("storage unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<pessoas_core::Error> for ApiError {
  fn from(e: pessoas_core::Error) -> Self {
    use pessoas_core::Error;
    match e {
      Error::Validation(v) => ApiError::BadRequest(v.to_string()),
      Error::EmptyPattern => ApiError::BadRequest(e.to_string()),
      Error::DuplicateNick(_) => ApiError::Unprocessable(e.to_string()),
      Error::NotFound(_) => ApiError::NotFound(e.to_string()),
      Error::Storage(source) => ApiError::Unavailable(source),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    match rejection {
      JsonRejection::JsonDataError(e) => ApiError::MalformedInput(e.body_text()),
      other => ApiError::Unprocessable(other.body_text()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) | ApiError::MalformedInput(m) => {
        (StatusCode::BAD_REQUEST, m.clone())
      }
      ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Unavailable(e) => {
        tracing::error!(error = %e, "storage failure");
        (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
