//! Integration tests for `SqliteStore` against an in-memory database.

use moodbook_core::{EmotionalState, PersonStore};
use rusqlite::types::Value as SqlValue;

use crate::{Error, SqliteStore, encode::RawPerson};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_uppercases_the_name() {
  let s = store().await;

  let p = s.create("mimi", EmotionalState::Happy).await.unwrap();
  assert_eq!(p.name, "MIMI");
  assert_eq!(p.emotional_state, 1);
  assert!(p.id > 0);
}

#[tokio::test]
async fn create_sad_person() {
  let s = store().await;

  let p = s.create("chocho", EmotionalState::Sad).await.unwrap();
  assert_eq!(p.name, "CHOCHO");
  assert_eq!(p.emotional_state, -1);
}

#[tokio::test]
async fn create_handles_mixed_case_input() {
  let s = store().await;

  let p = s.create("RiRi", EmotionalState::SoSo).await.unwrap();
  assert_eq!(p.name, "RIRI");
}

#[tokio::test]
async fn generated_ids_are_distinct() {
  let s = store().await;

  let a = s.create("mimi", EmotionalState::Happy).await.unwrap();
  let b = s.create("chocho", EmotionalState::Happy).await.unwrap();
  let c = s.create("riri", EmotionalState::Happy).await.unwrap();

  assert_ne!(a.id, b.id);
  assert_ne!(b.id, c.id);
  assert_ne!(a.id, c.id);
}

// ─── Emotional-state codes ───────────────────────────────────────────────────

#[tokio::test]
async fn all_states_roundtrip_to_their_codes() {
  let s = store().await;

  for (state, code) in [
    (EmotionalState::Sad, -1),
    (EmotionalState::SoSo, 0),
    (EmotionalState::Happy, 1),
  ] {
    let created = s.create("me", state).await.unwrap();
    let reloaded = s.find_by_id(created.id).await.unwrap();
    assert_eq!(reloaded.emotional_state, code);
  }
}

// ─── Find ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_id_returns_the_created_row() {
  let s = store().await;

  let created = s.create("mimi", EmotionalState::Happy).await.unwrap();
  let found = s.find_by_id(created.id).await.unwrap();

  assert_eq!(found.id, created.id);
  assert_eq!(found, created);
}

#[tokio::test]
async fn find_by_id_missing_row_errors() {
  let s = store().await;

  let err = s.find_by_id(999).await.unwrap_err();
  assert!(matches!(err, Error::PersonNotFound(999)));
}

#[tokio::test]
async fn find_by_id_is_idempotent() {
  let s = store().await;

  let created = s.create("tofi", EmotionalState::SoSo).await.unwrap();
  let first = s.find_by_id(created.id).await.unwrap();
  let second = s.find_by_id(created.id).await.unwrap();

  assert_eq!(first, second);
}

// ─── Row mapper ──────────────────────────────────────────────────────────────

#[test]
fn malformed_name_column_errors() {
  let raw = RawPerson {
    id:              SqlValue::Integer(1),
    name:            SqlValue::Null,
    emotional_state: SqlValue::Integer(1),
  };

  let err = raw.into_person().unwrap_err();
  assert!(matches!(err, Error::MalformedRow { column: "name", .. }));
}

#[test]
fn malformed_state_column_errors() {
  let raw = RawPerson {
    id:              SqlValue::Integer(1),
    name:            SqlValue::Text("mimi".into()),
    emotional_state: SqlValue::Text("happy".into()),
  };

  let err = raw.into_person().unwrap_err();
  assert!(matches!(
    err,
    Error::MalformedRow { column: "emotional_state", .. }
  ));
}

#[test]
fn well_formed_row_maps_and_uppercases() {
  let raw = RawPerson {
    id:              SqlValue::Integer(7),
    name:            SqlValue::Text("chocho".into()),
    emotional_state: SqlValue::Integer(-1),
  };

  let p = raw.into_person().unwrap();
  assert_eq!(p.id, 7);
  assert_eq!(p.name, "CHOCHO");
  assert_eq!(p.emotional_state, -1);
}
