//! Database setup and initialization.
//!
//! Opens the SQLite connection pool described by [`StoreConfig`] and makes sure
//! the `anime` table exists.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::{DatabaseLocation, StoreConfig};
use crate::errors::RepositoryResult;

/// Opens the pool and creates the schema.
///
/// File databases are created if missing. In-memory databases get a single
/// connection that is never recycled, since closing it would discard the data.
///
/// # Errors
/// Returns `RepositoryError::Storage` if the database cannot be opened or the
/// schema cannot be created.
pub async fn setup_database(config: &StoreConfig) -> RepositoryResult<SqlitePool> {
  let pool = match config.database_location() {
    DatabaseLocation::File(path) => {
      let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
      SqlitePoolOptions::new()
        .max_connections(config.max_connections())
        .connect_with(options)
        .await?
    }
    DatabaseLocation::InMemory => open_in_memory().await?,
  };

  create_schema(&pool).await?;
  info!(location = %config.database_location(), "データベースを初期化しました");

  Ok(pool)
}

/// Sets up an in-memory SQLite database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> RepositoryResult<SqlitePool> {
  let pool = open_in_memory().await?;
  create_schema(&pool).await?;
  Ok(pool)
}

async fn open_in_memory() -> RepositoryResult<SqlitePool> {
  let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
  let pool = SqlitePoolOptions::new()
    .min_connections(1)
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await?;
  Ok(pool)
}

/// Creates the `anime` table and its index.
///
/// Safe to call repeatedly (IF NOT EXISTS). The CHECK constraint rejects empty
/// names and names made only of ASCII whitespace (space, tab, LF, VT, FF, CR)
/// even when application validation is bypassed.
pub async fn create_schema(pool: &SqlitePool) -> RepositoryResult<()> {
  sqlx::query(
    r#"
    CREATE TABLE IF NOT EXISTS anime (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL CHECK (length(trim(name, ' ' || char(9, 10, 11, 12, 13))) > 0)
    )
    "#,
  )
  .execute(pool)
  .await?;

  sqlx::query("CREATE INDEX IF NOT EXISTS idx_anime_name ON anime(name)")
    .execute(pool)
    .await?;

  debug!("anime スキーマを確認しました");
  Ok(())
}
