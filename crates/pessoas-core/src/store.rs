//! The `PersonStore` trait.
//!
//! Implemented by [`MemoryStore`](crate::memory::MemoryStore) and by
//! `pessoas-store-sqlite`. The [`Registry`](crate::service::Registry) and the
//! HTTP layer depend on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::person::Person;

/// Abstraction over a person registry backend.
///
/// Every backend must give the same answers for the same history of calls:
///
/// - `create` is all-or-nothing and fails with
///   [`Error::DuplicateNick`](crate::Error::DuplicateNick) when the nick is
///   already stored, including when two creates with the same nick race.
/// - `search` returns each matching record once, in ascending id order, where
///   a match is a case-sensitive substring of the name, nick, birth date
///   (`YYYY-MM-DD`) or any stack entry. A backend may cap the result size.
///
/// Input has already been validated by the caller; stores do not re-check
/// field lengths.
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Insert a record whose identifier has already been assigned.
  fn create<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Records containing `pattern`. The pattern is never empty.
  fn search<'a>(
    &'a self,
    pattern: &'a str,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Number of records currently stored.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
