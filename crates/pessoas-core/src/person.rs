//! Person — the single entity held by the registry.
//!
//! Field names on the wire are Portuguese (`apelido`, `nome`, `nascimento`);
//! the Rust names are their English equivalents.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Calendar format used for `nascimento` everywhere it is rendered as text.
pub const BIRTH_FORMAT: &str = "%Y-%m-%d";

/// A candidate record, before the registry assigns it an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  #[serde(rename = "apelido")]
  pub nick:  String,
  #[serde(rename = "nome")]
  pub name:  String,
  #[serde(rename = "nascimento")]
  pub birth: NaiveDate,
  /// `null` and a missing field both mean "no stack".
  #[serde(default, deserialize_with = "null_as_empty")]
  pub stack: Vec<String>,
}

/// A stored record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:    Uuid,
  #[serde(rename = "apelido")]
  pub nick:  String,
  #[serde(rename = "nome")]
  pub name:  String,
  #[serde(rename = "nascimento")]
  pub birth: NaiveDate,
  pub stack: Vec<String>,
}

impl Person {
  pub fn from_new(id: Uuid, new: NewPerson) -> Self {
    Self {
      id,
      nick: new.nick,
      name: new.name,
      birth: new.birth,
      stack: new.stack,
    }
  }

  /// `birth` rendered the way it is searched and stored.
  pub fn birth_text(&self) -> String { self.birth.format(BIRTH_FORMAT).to_string() }

  /// Whether `pattern` occurs (case-sensitively) in the name, nick, birth date
  /// or any stack entry.
  pub fn matches(&self, pattern: &str) -> bool {
    self.name.contains(pattern)
      || self.nick.contains(pattern)
      || self.birth_text().contains(pattern)
      || self.stack.iter().any(|tag| tag.contains(pattern))
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sample() -> Person {
    Person {
      id:    Uuid::now_v7(),
      nick:  "josé".into(),
      name:  "José Roberto".into(),
      birth: NaiveDate::from_ymd_opt(2000, 10, 1).unwrap(),
      stack: vec!["C#".into(), "Node".into(), "Oracle".into()],
    }
  }

  #[test]
  fn decodes_wire_names() {
    let new: NewPerson = serde_json::from_value(json!({
      "apelido":    "josé",
      "nome":       "José Roberto",
      "nascimento": "2000-10-01",
      "stack":      ["C#", "Node", "Oracle"],
    }))
    .unwrap();

    assert_eq!(new.nick, "josé");
    assert_eq!(new.birth, NaiveDate::from_ymd_opt(2000, 10, 1).unwrap());
    assert_eq!(new.stack, ["C#", "Node", "Oracle"]);
  }

  #[test]
  fn null_or_missing_stack_is_empty() {
    let null: NewPerson = serde_json::from_value(json!({
      "apelido": "ana", "nome": "Ana", "nascimento": "1985-09-23", "stack": null,
    }))
    .unwrap();
    let missing: NewPerson = serde_json::from_value(json!({
      "apelido": "ana", "nome": "Ana", "nascimento": "1985-09-23",
    }))
    .unwrap();

    assert!(null.stack.is_empty());
    assert!(missing.stack.is_empty());
  }

  #[test]
  fn rejects_wrong_types_and_bad_dates() {
    let numeric_name = serde_json::from_value::<NewPerson>(json!({
      "apelido": "ana", "nome": 1, "nascimento": "1985-09-23", "stack": [],
    }));
    let numeric_tag = serde_json::from_value::<NewPerson>(json!({
      "apelido": "ana", "nome": "Ana", "nascimento": "1985-09-23", "stack": [1, "x"],
    }));
    let bad_date = serde_json::from_value::<NewPerson>(json!({
      "apelido": "ana", "nome": "Ana", "nascimento": "1985-02-30", "stack": [],
    }));

    assert!(numeric_name.is_err());
    assert!(numeric_tag.is_err());
    assert!(bad_date.is_err());
  }

  #[test]
  fn stack_order_survives_json() {
    let person = sample();
    let text = serde_json::to_string(&person).unwrap();
    let back: Person = serde_json::from_str(&text).unwrap();
    assert_eq!(back.stack, ["C#", "Node", "Oracle"]);
  }

  #[test]
  fn matches_any_field_case_sensitively() {
    let person = sample();
    assert!(person.matches("Roberto"));
    assert!(person.matches("osé"));
    assert!(person.matches("2000-10"));
    assert!(person.matches("Ora"));
    assert!(!person.matches("node"));
    assert!(!person.matches("xyz123"));
  }
}
