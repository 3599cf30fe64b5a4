//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use moodbook_core::{EmotionalState, Person, PersonStore};

use crate::{Error, Result, encode::RawPerson, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A people roster backed by a single SQLite file.
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

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn find_by_id(&self, id: i64) -> Result<Person> {
    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, emotional_state FROM people WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawPerson {
                  id:              row.get(0)?,
                  name:            row.get(1)?,
                  emotional_state: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    match raw {
      Some(raw) => raw.into_person(),
      None => Err(Error::PersonNotFound(id)),
    }
  }

  async fn create(&self, name: &str, state: EmotionalState) -> Result<Person> {
    let code = state.code();
    let name_owned = name.to_owned();

    let generated_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, emotional_state) VALUES (?1, ?2)",
          rusqlite::params![name_owned, code],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    // A rowid of zero or below means the store never assigned a key.
    // Hard failure; the inserted row (if any) is not retried or cleaned up.
    if generated_id <= 0 {
      return Err(Error::MissingGeneratedId);
    }

    // Reload by the generated key so the returned value reflects exactly
    // what was persisted. No transaction spans the two statements.
    self.find_by_id(generated_id).await
  }
}
