//! Error type for `pessoas-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// The `people.nick` UNIQUE constraint rejected an insert.
  #[error("nick already taken: {0:?}")]
  DuplicateNick(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for pessoas_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::DuplicateNick(nick) => Self::DuplicateNick(nick),
      other => Self::Storage(Box::new(other)),
    }
  }
}
