//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use pessoas_core::{person::Person, store::PersonStore};

use crate::{
  Error, Result,
  encode::{PersonRow, encode_uuid},
  schema::SCHEMA,
};

/// Maximum number of records returned by a single search.
pub const SEARCH_LIMIT: usize = 50;

const SELECT_COLUMNS: &str = "SELECT id, nick, name, birth, stack FROM people";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person registry backed by a single SQLite file.
///
/// Nick uniqueness is enforced by the `UNIQUE` constraint on `people.nick`,
/// so it holds across every process sharing the file, not just this one.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Whether `e` is a `UNIQUE` violation. The only unique column besides the
/// primary key is `nick`, and primary-key conflicts report a different code.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(err, _)
      if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn create(&self, person: &Person) -> Result<()> {
    let row = PersonRow::encode(person)?;

    let inserted = self
      .conn
      .call(move |conn| {
        match conn.execute(
          "INSERT INTO people (id, nick, name, birth, stack)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![row.id, row.nick, row.name, row.birth, row.stack],
        ) {
          Ok(_) => Ok(true),
          Err(e) if is_unique_violation(&e) => Ok(false),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if !inserted {
      return Err(Error::DuplicateNick(person.nick.clone()));
    }
    Ok(())
  }

  async fn get(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<PersonRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_COLUMNS} WHERE id = ?1"),
              rusqlite::params![id_str],
              PersonRow::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(PersonRow::into_person).transpose()
  }

  async fn search(&self, pattern: &str) -> Result<Vec<Person>> {
    // Plain substring containment on every field, the same rule
    // `Person::matches` applies. `instr` is case-sensitive, unlike `LIKE`.
    let pattern = pattern.to_owned();
    let limit = SEARCH_LIMIT as i64;

    let raws: Vec<PersonRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "{SELECT_COLUMNS}
           WHERE instr(name, ?1) > 0
              OR instr(nick, ?1) > 0
              OR instr(birth, ?1) > 0
              OR EXISTS (
                   SELECT 1 FROM json_each(people.stack)
                   WHERE instr(json_each.value, ?1) > 0
                 )
           ORDER BY id
           LIMIT ?2"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![pattern, limit], PersonRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(PersonRow::into_person).collect()
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT count(*) FROM people", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }
}
