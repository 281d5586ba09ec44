//! `SQLite` implementation of the `AnimeRepository` trait.

use async_trait::async_trait;
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use super::AnimeRepository;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Anime, Page, PageRequest};

fn row_to_anime(row: &SqliteRow) -> RepositoryResult<Anime> {
  Ok(Anime {
    id: Some(row.try_get("id")?),
    name: row.try_get("name")?,
  })
}

/// `SQLite` implementation of the `AnimeRepository` trait.
///
/// Every method is a single statement, so each call is atomic on its own.
#[derive(Clone)]
pub struct SqliteAnimeRepository {
  pool: SqlitePool,
}

impl SqliteAnimeRepository {
  /// Wraps a pool whose schema has already been created.
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Underlying pool.
  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }
}

#[async_trait]
impl AnimeRepository for SqliteAnimeRepository {
  async fn save(&self, anime: Anime) -> RepositoryResult<Anime> {
    // 空白のみの名前は拒否（CHECK 制約は ASCII 空白しか見ない）
    if anime.name.trim().is_empty() {
      return Err(RepositoryError::ConstraintViolation {
        reason: "name must not be blank".to_string(),
      });
    }

    match anime.id {
      None => {
        let id: i64 = sqlx::query_scalar("INSERT INTO anime (name) VALUES (?) RETURNING id")
          .bind(&anime.name)
          .fetch_one(&self.pool)
          .await?;

        Ok(Anime {
          id: Some(id),
          name: anime.name,
        })
      }
      Some(id) => {
        let result = sqlx::query("UPDATE anime SET name = ? WHERE id = ?")
          .bind(&anime.name)
          .bind(id)
          .execute(&self.pool)
          .await?;

        if result.rows_affected() == 0 {
          return Err(RepositoryError::NotFound { id });
        }
        Ok(anime)
      }
    }
  }

  async fn delete(&self, anime: &Anime) -> RepositoryResult<()> {
    let Some(id) = anime.id else {
      return Ok(());
    };

    sqlx::query("DELETE FROM anime WHERE id = ?").bind(id).execute(&self.pool).await?;
    Ok(())
  }

  async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Anime>> {
    let row = sqlx::query("SELECT id, name FROM anime WHERE id = ?")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    row.as_ref().map(row_to_anime).transpose()
  }

  async fn find_all_paged(&self, request: &PageRequest) -> RepositoryResult<Page<Anime>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM anime").fetch_one(&self.pool).await?;

    // column and direction come from closed enums, never from client text
    let sort = request.sort();
    let query = format!(
      "SELECT id, name FROM anime ORDER BY {} {}, id ASC LIMIT ? OFFSET ?",
      sort.field.column(),
      sort.direction.keyword()
    );

    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    let rows = sqlx::query(&query)
      .bind(i64::from(request.size()))
      .bind(offset)
      .fetch_all(&self.pool)
      .await?;

    let content = rows.iter().map(row_to_anime).collect::<RepositoryResult<Vec<_>>>()?;
    Ok(Page::new(content, request, u64::try_from(total).unwrap_or(0)))
  }

  async fn find_all(&self) -> RepositoryResult<Vec<Anime>> {
    let rows = sqlx::query("SELECT id, name FROM anime ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await?;

    rows.iter().map(row_to_anime).collect()
  }

  async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Anime>> {
    let rows = sqlx::query("SELECT id, name FROM anime WHERE name = ? ORDER BY id ASC")
      .bind(name)
      .fetch_all(&self.pool)
      .await?;

    rows.iter().map(row_to_anime).collect()
  }
}
