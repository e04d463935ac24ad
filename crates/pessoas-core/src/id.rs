//! Time-ordered identifiers for new records.

use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

/// Issues UUIDv7 identifiers that strictly increase for the lifetime of the
/// generator, even when two calls land in the same clock tick or the system
/// clock steps backwards.
///
/// Cloning is cheap; clones share the same sequence.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
  last: Arc<Mutex<Option<Uuid>>>,
}

impl IdGenerator {
  pub fn new() -> Self { Self::default() }

  pub fn next(&self) -> Uuid {
    let candidate = Uuid::now_v7();
    let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);

    let id = match *last {
      Some(prev) if candidate <= prev => Uuid::from_u128(prev.as_u128() + 1),
      _ => candidate,
    };
    *last = Some(id);
    id
  }
}
