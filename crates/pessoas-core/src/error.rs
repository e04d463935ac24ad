//! Error types for `pessoas-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid person: {0}")]
  Validation(#[from] ValidationError),

  #[error("nick already taken: {0:?}")]
  DuplicateNick(String),

  #[error("person not found: {0}")]
  NotFound(Uuid),

  #[error("search pattern must not be empty")]
  EmptyPattern,

  /// The backing store could not complete the operation.
  #[error("storage unavailable: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
