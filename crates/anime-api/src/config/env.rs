//! Config loading from environment variables

use std::str::FromStr;

use anime_store::config::{DatabaseConfig, LoggingConfig, PaginationConfig};
use anime_store::{DatabaseLocation, LogLevel, StoreConfig};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8080")
  pub bind_addr: String,
  /// SQLite database location
  pub database: DatabaseLocation,
  /// Connection pool size
  pub db_max_connections: u32,
  /// Page size when `size` is not given
  pub default_page_size: u32,
  /// Upper bound for `size`
  pub max_page_size: u32,
  /// Log level used when `RUST_LOG` is not set
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | Variable | Default |
  /// |---|---|
  /// | `ANIME_API_BIND_ADDR` | `127.0.0.1:8080` |
  /// | `ANIME_DATABASE_PATH` | `<data_dir>/anime-store/anime.db` (`:memory:` for in-memory) |
  /// | `ANIME_DB_MAX_CONNECTIONS` | `5` |
  /// | `ANIME_DEFAULT_PAGE_SIZE` | `20` |
  /// | `ANIME_MAX_PAGE_SIZE` | `100` |
  /// | `ANIME_LOG_LEVEL` | `info` |
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// `from_env` delegates here; tests pass a map instead of mutating the process environment.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup("ANIME_API_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let database = match lookup("ANIME_DATABASE_PATH") {
      Some(path) if !path.trim().is_empty() => DatabaseLocation::parse(&path),
      _ => DatabaseLocation::default_file().map_err(|e| ApiError::config(e.to_string()))?,
    };

    let db_max_connections =
      parse_number(&lookup, "ANIME_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
    let default_page_size = parse_number(&lookup, "ANIME_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
    let max_page_size = parse_number(&lookup, "ANIME_MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;

    let log_level = match lookup("ANIME_LOG_LEVEL") {
      Some(level) => LogLevel::from_str(&level).map_err(ApiError::config)?,
      None => LogLevel::default(),
    };

    Ok(Self {
      bind_addr,
      database,
      db_max_connections,
      default_page_size,
      max_page_size,
      log_level,
    })
  }

  /// Pagination limits handed to the list handler
  pub fn pagination(&self) -> PaginationConfig {
    PaginationConfig {
      default_page_size: self.default_page_size,
      max_page_size: self.max_page_size,
    }
  }

  /// Builds the anime-store configuration
  pub fn store_config(&self) -> StoreConfig {
    StoreConfig {
      database: DatabaseConfig {
        location: self.database.clone(),
        max_connections: self.db_max_connections,
      },
      pagination: self.pagination(),
      logging: LoggingConfig {
        level: self.log_level,
      },
    }
  }
}

fn parse_number<F>(lookup: &F, key: &str, default: u32) -> crate::errors::Result<u32>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(key) {
    Some(value) => value
      .trim()
      .parse()
      .map_err(|_| ApiError::config(format!("{key} must be a non-negative integer: {value}"))),
    None => Ok(default),
  }
}
