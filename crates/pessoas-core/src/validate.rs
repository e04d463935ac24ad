//! Field-length checks applied before a person is stored.
//!
//! Checks run in a fixed order (name, nick, then each stack entry in index
//! order) and stop at the first violation, so the reported error for a record
//! with several problems is always the earliest one in that order.

use thiserror::Error;

use crate::person::NewPerson;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_NICK_LEN: usize = 32;
pub const MAX_STACK_ENTRY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("nome must be at most {MAX_NAME_LEN} characters")]
  NameTooLong,

  #[error("apelido must be at most {MAX_NICK_LEN} characters")]
  NickTooLong,

  #[error("stack entry {index} must be at most {MAX_STACK_ENTRY_LEN} characters")]
  StackEntryTooLong { index: usize },
}

impl ValidationError {
  /// The wire name of the offending field.
  pub fn field(&self) -> &'static str {
    match self {
      Self::NameTooLong => "nome",
      Self::NickTooLong => "apelido",
      Self::StackEntryTooLong { .. } => "stack",
    }
  }
}

/// Lengths are counted in characters, not bytes.
fn too_long(value: &str, max: usize) -> bool { value.chars().count() > max }

pub fn validate(person: &NewPerson) -> Result<(), ValidationError> {
  if too_long(&person.name, MAX_NAME_LEN) {
    return Err(ValidationError::NameTooLong);
  }
  if too_long(&person.nick, MAX_NICK_LEN) {
    return Err(ValidationError::NickTooLong);
  }
  if let Some(index) = person
    .stack
    .iter()
    .position(|tag| too_long(tag, MAX_STACK_ENTRY_LEN))
  {
    return Err(ValidationError::StackEntryTooLong { index });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn person(name: &str, nick: &str, stack: &[&str]) -> NewPerson {
    NewPerson {
      nick:  nick.into(),
      name:  name.into(),
      birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
      stack: stack.iter().map(|s| s.to_string()).collect(),
    }
  }

  #[test]
  fn accepts_values_at_the_limit() {
    let p = person(&"n".repeat(100), &"k".repeat(32), &[&"s".repeat(32), ""]);
    assert_eq!(validate(&p), Ok(()));
  }

  #[test]
  fn rejects_long_name() {
    let p = person(&"n".repeat(101), "ok", &[]);
    assert_eq!(validate(&p), Err(ValidationError::NameTooLong));
    assert_eq!(ValidationError::NameTooLong.field(), "nome");
  }

  #[test]
  fn rejects_long_nick() {
    let p = person("Ana", &"k".repeat(33), &[]);
    assert_eq!(validate(&p), Err(ValidationError::NickTooLong));
  }

  #[test]
  fn reports_first_long_stack_entry() {
    let long = "s".repeat(33);
    let p = person("Ana", "ana", &["rust", &long, &long]);
    assert_eq!(
      validate(&p),
      Err(ValidationError::StackEntryTooLong { index: 1 })
    );
  }

  #[test]
  fn name_is_checked_before_nick_and_stack() {
    let long = "x".repeat(200);
    let p = person(&long, &long, &[&long]);
    assert_eq!(validate(&p), Err(ValidationError::NameTooLong));

    let p = person("Ana", &long, &[&long]);
    assert_eq!(validate(&p), Err(ValidationError::NickTooLong));
  }

  #[test]
  fn counts_characters_not_bytes() {
    // 32 two-byte characters.
    let p = person("Ana", &"ç".repeat(32), &[]);
    assert_eq!(validate(&p), Ok(()));
  }
}
