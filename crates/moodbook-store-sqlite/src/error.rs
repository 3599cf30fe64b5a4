//! Error type for `moodbook-store-sqlite`.
//!
//! Every variant is unrecoverable at the point of occurrence: the operation
//! is aborted and the error surfaced to the caller with no retry and no
//! silent default.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// `find_by_id` matched zero rows.
  #[error("person not found: {0}")]
  PersonNotFound(i64),

  /// A `people` row had a missing or mistyped column.
  #[error("malformed people row: column {column:?} held {found}")]
  MalformedRow {
    column: &'static str,
    found:  &'static str,
  },

  /// An insert succeeded but the store returned no usable generated key.
  #[error("insert did not yield a generated id")]
  MissingGeneratedId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
