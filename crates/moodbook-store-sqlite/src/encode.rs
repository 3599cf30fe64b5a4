//! The row mapper between raw `people` rows and the [`Person`] domain value.
//!
//! Columns are read as loosely-typed SQLite values and decoded here, so a
//! missing or mistyped column surfaces as [`Error::MalformedRow`] naming the
//! offending column instead of an opaque driver error.

use moodbook_core::Person;
use rusqlite::types::Value as SqlValue;

use crate::{Error, Result};

/// Human-readable kind of a SQLite cell, for error messages.
fn kind_of(v: &SqlValue) -> &'static str {
  match v {
    SqlValue::Null => "NULL",
    SqlValue::Integer(_) => "an integer",
    SqlValue::Real(_) => "a real",
    SqlValue::Text(_) => "text",
    SqlValue::Blob(_) => "a blob",
  }
}

fn decode_integer(column: &'static str, v: SqlValue) -> Result<i64> {
  match v {
    SqlValue::Integer(n) => Ok(n),
    other => Err(Error::MalformedRow { column, found: kind_of(&other) }),
  }
}

fn decode_text(column: &'static str, v: SqlValue) -> Result<String> {
  match v {
    SqlValue::Text(s) => Ok(s),
    other => Err(Error::MalformedRow { column, found: kind_of(&other) }),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw cells read directly from a `people` row.
pub struct RawPerson {
  pub id:              SqlValue,
  pub name:            SqlValue,
  pub emotional_state: SqlValue,
}

impl RawPerson {
  /// Decode the three columns and assemble the domain value.
  ///
  /// The name is upper-cased by [`Person::new`]; the emotional-state code is
  /// carried through as the raw integer read from storage.
  pub fn into_person(self) -> Result<Person> {
    let id = decode_integer("id", self.id)?;
    let name = decode_text("name", self.name)?;
    let emotional_state = decode_integer("emotional_state", self.emotional_state)?;
    Ok(Person::new(id, name, emotional_state))
  }
}
