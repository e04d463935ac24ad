//! [`MemoryStore`] — an in-process [`PersonStore`].

use std::{
  collections::{BTreeMap, HashSet},
  sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use uuid::Uuid;

use crate::{Error, Result, person::Person, store::PersonStore};

#[derive(Debug, Default)]
struct Records {
  /// Keyed by id, so iteration is already in creation order.
  by_id: BTreeMap<Uuid, Person>,
  nicks: HashSet<String>,
}

/// A registry held entirely in memory; its contents live as long as the value.
///
/// The nick check and the insert happen under one write lock, so two racing
/// creates with the same nick can never both succeed, and a create that has
/// returned is visible to every read that starts afterwards.
#[derive(Debug, Default)]
pub struct MemoryStore {
  records: RwLock<Records>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  // Records are immutable once inserted, so a panic in another holder cannot
  // leave a half-written entry behind; recovering from poison is safe.
  fn read(&self) -> RwLockReadGuard<'_, Records> {
    self.records.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Records> {
    self.records.write().unwrap_or_else(PoisonError::into_inner)
  }
}

impl PersonStore for MemoryStore {
  type Error = Error;

  async fn create(&self, person: &Person) -> Result<()> {
    let mut records = self.write();
    if records.nicks.contains(&person.nick) {
      return Err(Error::DuplicateNick(person.nick.clone()));
    }
    records.nicks.insert(person.nick.clone());
    records.by_id.insert(person.id, person.clone());
    Ok(())
  }

  async fn get(&self, id: Uuid) -> Result<Option<Person>> {
    Ok(self.read().by_id.get(&id).cloned())
  }

  async fn search(&self, pattern: &str) -> Result<Vec<Person>> {
    Ok(
      self
        .read()
        .by_id
        .values()
        .filter(|p| p.matches(pattern))
        .cloned()
        .collect(),
    )
  }

  async fn count(&self) -> Result<u64> { Ok(self.read().by_id.len() as u64) }
}
