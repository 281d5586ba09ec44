//! Anime repository trait definition.
//!
//! The service layer talks to storage only through this trait; no sqlx types
//! appear in its signatures.

mod sqlite_repository;

use async_trait::async_trait;

use crate::errors::RepositoryResult;
use crate::models::{Anime, Page, PageRequest};

pub use sqlite_repository::SqliteAnimeRepository;

/// Persistence operations for [`Anime`].
///
/// # Contract
///
/// - `find_by_name` is an exact, case-sensitive match and never fails for "no rows"
/// - `delete` succeeds silently when the row is already gone
/// - absence is reported as `None` here; turning it into `NotFound` is the service's job
#[async_trait]
pub trait AnimeRepository: Send + Sync {
  /// Inserts when `anime.id` is `None`, otherwise updates the row with that id.
  ///
  /// Returns the stored record including the generated id.
  ///
  /// # Errors
  /// - `RepositoryError::ConstraintViolation` if the name is empty or whitespace-only
  /// - `RepositoryError::NotFound` when updating an id that no longer exists
  async fn save(&self, anime: Anime) -> RepositoryResult<Anime>;

  /// Removes the row with `anime.id`. No-op for unsaved or already deleted records.
  async fn delete(&self, anime: &Anime) -> RepositoryResult<()>;

  /// Looks up one record.
  async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Anime>>;

  /// Returns one page ordered by the request's sort, ties broken by id.
  async fn find_all_paged(&self, request: &PageRequest) -> RepositoryResult<Page<Anime>>;

  /// Returns every record ordered by id.
  async fn find_all(&self) -> RepositoryResult<Vec<Anime>>;

  /// Returns every record whose name equals `name`, ordered by id.
  async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Anime>>;
}
