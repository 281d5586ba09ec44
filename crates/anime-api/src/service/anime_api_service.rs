//! Anime catalog service seam used by the HTTP handlers

use async_trait::async_trait;

use anime_store::{Anime, AnimePostRequestBody, AnimePutRequestBody, AnimeService, Page, PageRequest};

use crate::config::Config;
use crate::errors::Result;

/// Common interface for the anime catalog service
///
/// This trait allows swapping the production implementation (`AnimeApiServiceFull`) with
/// test stubs/mocks. Absence by id must be reported as `ApiError::NotFound`.
#[async_trait]
pub trait AnimeApiService: Send + Sync {
  /// One page of records
  async fn list(&self, request: PageRequest) -> Result<Page<Anime>>;

  /// All records, unpaged
  async fn list_all(&self) -> Result<Vec<Anime>>;

  /// Record by id
  ///
  /// # Errors
  /// `ApiError::NotFound` if no record has this id
  async fn find_by_id(&self, id: i64) -> Result<Anime>;

  /// Records whose name equals `name` (possibly none)
  async fn find_by_name(&self, name: &str) -> Result<Vec<Anime>>;

  /// Creates a record
  ///
  /// # Errors
  /// `ApiError::InvalidInput` for a blank or over-long name
  async fn save(&self, body: AnimePostRequestBody) -> Result<Anime>;

  /// Replaces an existing record
  ///
  /// # Errors
  /// - `ApiError::InvalidInput` for a blank or over-long name
  /// - `ApiError::NotFound` if no record has `body.id`
  async fn replace(&self, body: AnimePutRequestBody) -> Result<()>;

  /// Deletes a record
  ///
  /// # Errors
  /// `ApiError::NotFound` if no record has this id (including one already deleted)
  async fn delete(&self, id: i64) -> Result<()>;
}

/// Production implementation backed by [`AnimeService`] and SQLite
#[derive(Clone)]
pub struct AnimeApiServiceFull {
  inner: AnimeService,
}

impl AnimeApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (database location, pagination limits)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the database cannot be opened
  pub async fn new(config: &Config) -> Result<Self> {
    let inner = AnimeService::init(&config.store_config()).await?;
    Ok(Self { inner })
  }

  /// Wraps an already constructed store service
  #[must_use]
  pub fn from_service(inner: AnimeService) -> Self {
    Self { inner }
  }
}

/// Production implementation of trait `AnimeApiService`
#[async_trait]
impl AnimeApiService for AnimeApiServiceFull {
  async fn list(&self, request: PageRequest) -> Result<Page<Anime>> {
    Ok(self.inner.list_all(&request).await?)
  }

  async fn list_all(&self) -> Result<Vec<Anime>> {
    Ok(self.inner.list_all_unpaged().await?)
  }

  async fn find_by_id(&self, id: i64) -> Result<Anime> {
    Ok(self.inner.find_by_id_or_fail(id).await?)
  }

  async fn find_by_name(&self, name: &str) -> Result<Vec<Anime>> {
    Ok(self.inner.find_by_name(name).await?)
  }

  async fn save(&self, body: AnimePostRequestBody) -> Result<Anime> {
    Ok(self.inner.save(body).await?)
  }

  async fn replace(&self, body: AnimePutRequestBody) -> Result<()> {
    Ok(self.inner.replace(body).await?)
  }

  async fn delete(&self, id: i64) -> Result<()> {
    Ok(self.inner.delete(id).await?)
  }
}
