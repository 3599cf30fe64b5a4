//! `moodbook` demo binary.
//!
//! Opens (or creates) a SQLite roster, seeds a handful of people, and reads
//! the last one back. The object graph is built by hand in `main` — store
//! first, then the seed routine invoked exactly once — with no container or
//! event bus in between.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use moodbook_core::{EmotionalState, PersonStore};
use moodbook_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Moodbook roster demo")]
struct Cli {
  /// Path to the SQLite database file.
  #[arg(short, long, default_value = "moodbook.db")]
  db: PathBuf,

  /// Use a throwaway in-memory database instead of a file.
  #[arg(long)]
  in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let store = if cli.in_memory {
    SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    SqliteStore::open(&cli.db)
      .await
      .with_context(|| format!("failed to open store at {:?}", cli.db))?
  };

  seed_roster(&store).await
}

/// Seed the roster and read the last created entry back by its generated id.
async fn seed_roster(store: &SqliteStore) -> anyhow::Result<()> {
  let mut last_id = 0;
  for name in ["mimi", "chocho", "riri", "me"] {
    let person = store.create(name, EmotionalState::Happy).await?;
    tracing::info!(
      id = person.id,
      name = %person.name,
      state = person.emotional_state,
      "created person"
    );
    last_id = person.id;
  }

  let found = store.find_by_id(last_id).await?;
  tracing::info!(
    id = found.id,
    name = %found.name,
    state = found.emotional_state,
    "read person back"
  );

  Ok(())
}
