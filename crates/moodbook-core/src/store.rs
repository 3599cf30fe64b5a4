//! The `PersonStore` trait.
//!
//! Implemented by storage backends (e.g. `moodbook-store-sqlite`). The demo
//! binary depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{EmotionalState, Person};

/// Abstraction over a people-roster storage backend.
///
/// Both operations are single round trips with implicit auto-commit; no
/// transaction spans `create`'s insert and the read-back that follows it.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new person and return the freshly reloaded row.
  ///
  /// The store encodes `state` to its integer code, inserts `(name, code)`,
  /// reads the generated id back, then reloads the row by that id — so the
  /// returned value reflects exactly what was persisted (name upper-cased
  /// by the row mapper, id assigned by the store).
  fn create<'a>(
    &'a self,
    name: &'a str,
    state: EmotionalState,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + 'a;

  /// Fetch a person by primary key. Fails if no row matches.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;
}
