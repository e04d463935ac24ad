//! [`Registry`] — the entry point the HTTP layer talks to.
//!
//! Creation runs validation, assigns an id and hands the record to the store.
//! Reads go straight to the store; backend errors are folded into
//! [`Error`](crate::Error) on the way out.

use uuid::Uuid;

use crate::{
  Error, Result,
  id::IdGenerator,
  person::{NewPerson, Person},
  store::PersonStore,
  validate::validate,
};

pub struct Registry<S> {
  store: S,
  ids:   IdGenerator,
}

impl<S: PersonStore> Registry<S> {
  pub fn new(store: S) -> Self {
    Self {
      store,
      ids: IdGenerator::new(),
    }
  }

  /// Validate, assign an id and store `input`.
  ///
  /// A record that fails validation never reaches the store and consumes no
  /// id.
  pub async fn create(&self, input: NewPerson) -> Result<Person> {
    validate(&input)?;

    let person = Person::from_new(self.ids.next(), input);
    self.store.create(&person).await.map_err(Into::<Error>::into)?;
    Ok(person)
  }

  pub async fn get(&self, id: Uuid) -> Result<Person> {
    self
      .store
      .get(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::NotFound(id))
  }

  /// An empty pattern is rejected here; stores never see one.
  pub async fn search(&self, pattern: &str) -> Result<Vec<Person>> {
    if pattern.is_empty() {
      return Err(Error::EmptyPattern);
    }
    self.store.search(pattern).await.map_err(Into::into)
  }

  pub async fn count(&self) -> Result<u64> {
    self.store.count().await.map_err(Into::into)
  }
}
