//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnimeApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Anime catalog service
  ///
  /// - Production: `Arc::new(AnimeApiServiceFull::new(&config).await?)`
  /// - Test: `Arc::new(StubAnimeApiService)`
  pub service: Arc<dyn AnimeApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnimeApiService>) -> Self {
    Self { config, service }
  }
}
