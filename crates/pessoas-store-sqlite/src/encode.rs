//! Encoding and decoding helpers between [`Person`] and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings, which sort in the same
//! order as the UUIDs themselves. Birth dates use
//! [`BIRTH_FORMAT`](pessoas_core::person::BIRTH_FORMAT). The stack is a
//! compact JSON array.

use chrono::NaiveDate;
use pessoas_core::person::{BIRTH_FORMAT, Person};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Birth date ───────────────────────────────────────────────────────────────

pub fn decode_birth(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, BIRTH_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Stack ────────────────────────────────────────────────────────────────────

pub fn encode_stack(stack: &[String]) -> Result<String> {
  Ok(serde_json::to_string(stack)?)
}

pub fn decode_stack(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column values for an insert, owned so they can move onto the
/// connection thread.
pub struct PersonRow {
  pub id:    String,
  pub nick:  String,
  pub name:  String,
  pub birth: String,
  pub stack: String,
}

impl PersonRow {
  pub fn encode(person: &Person) -> Result<Self> {
    Ok(Self {
      id:    encode_uuid(person.id),
      nick:  person.nick.clone(),
      name:  person.name.clone(),
      birth: person.birth_text(),
      stack: encode_stack(&person.stack)?,
    })
  }

  /// Read a row selected as `id, nick, name, birth, stack`.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:    row.get(0)?,
      nick:  row.get(1)?,
      name:  row.get(2)?,
      birth: row.get(3)?,
      stack: row.get(4)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:    decode_uuid(&self.id)?,
      nick:  self.nick,
      name:  self.name,
      birth: decode_birth(&self.birth)?,
      stack: decode_stack(&self.stack)?,
    })
  }
}
