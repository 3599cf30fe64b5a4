//! Person — the single entity of the roster.
//!
//! A person is an immutable value assembled from a storage row. The only
//! normalization rule lives in the constructor: names are always held in
//! upper case, regardless of how the caller spelled them.

use serde::{Deserialize, Serialize};

// ─── Emotional state ─────────────────────────────────────────────────────────

/// The closed set of moods a person can be recorded with.
///
/// Persisted as a small integer code (see [`EmotionalState::code`]). The read
/// path keeps the raw code on the [`Person`] value rather than decoding it
/// back into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
  Sad,
  Happy,
  SoSo,
}

impl EmotionalState {
  /// The integer code stored in the `emotional_state` column.
  ///
  /// Exhaustive over the enum; there is no failing decode counterpart
  /// because reads carry the raw code through unchanged.
  pub fn code(self) -> i64 {
    match self {
      Self::Sad => -1,
      Self::Happy => 1,
      Self::SoSo => 0,
    }
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A persisted roster entry.
///
/// `id` is assigned by the store on creation and is never client-supplied.
/// `emotional_state` is the raw persisted code, not the enum symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:              i64,
  pub name:            String,
  pub emotional_state: i64,
}

impl Person {
  /// Build a person from row values, upper-casing the name.
  ///
  /// This is the only place the normalization happens, so a value reloaded
  /// from the store has been upper-cased exactly once.
  pub fn new(id: i64, name: impl Into<String>, emotional_state: i64) -> Self {
    Self {
      id,
      name: name.into().to_uppercase(),
      emotional_state,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_match_the_storage_contract() {
    assert_eq!(EmotionalState::Sad.code(), -1);
    assert_eq!(EmotionalState::SoSo.code(), 0);
    assert_eq!(EmotionalState::Happy.code(), 1);
  }

  #[test]
  fn name_is_uppercased_at_construction() {
    let p = Person::new(1, "mimi", 1);
    assert_eq!(p.name, "MIMI");

    let p = Person::new(2, "ChoCho", -1);
    assert_eq!(p.name, "CHOCHO");
  }

  #[test]
  fn already_uppercase_name_is_unchanged() {
    let p = Person::new(3, "RIRI", 0);
    assert_eq!(p.name, "RIRI");
  }
}
