// crates/anime-store/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Directory name created under the OS data directory for the default database file.
pub const DEFAULT_DATA_DIR_NAME: &str = "anime-store";

/// Default database file name.
pub const DEFAULT_DATABASE_FILE: &str = "anime.db";

/// Where the SQLite database lives.
///
/// `InMemory` databases vanish when the pool is dropped; they are meant for tests
/// and throwaway local runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseLocation {
  /// Database file on disk (created if missing)
  File(PathBuf),
  /// Private in-memory database
  InMemory,
}

impl DatabaseLocation {
  /// Parses the value of a path setting.
  ///
  /// `":memory:"` selects an in-memory database, anything else is a file path.
  pub fn parse(value: &str) -> Self {
    if value == ":memory:" {
      DatabaseLocation::InMemory
    } else {
      DatabaseLocation::File(PathBuf::from(value))
    }
  }

  /// Default on-disk location: `<data_dir>/anime-store/anime.db`.
  ///
  /// # Errors
  /// Returns `ConfigError::DataDirNotFound` when the OS data directory is unknown.
  pub fn default_file() -> Result<Self, ConfigError> {
    let base = dirs::data_dir().ok_or(ConfigError::DataDirNotFound)?;
    Ok(DatabaseLocation::File(
      base.join(DEFAULT_DATA_DIR_NAME).join(DEFAULT_DATABASE_FILE),
    ))
  }
}

impl std::fmt::Display for DatabaseLocation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DatabaseLocation::File(path) => write!(f, "{}", path.display()),
      DatabaseLocation::InMemory => write!(f, ":memory:"),
    }
  }
}

/// Top-level configuration for anime-store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
  /// [database] section
  pub database: DatabaseConfig,
  /// [pagination] section
  #[serde(default)]
  pub pagination: PaginationConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [database] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  /// Database location
  pub location: DatabaseLocation,
  /// Upper bound of pooled connections (forced to 1 for in-memory databases)
  #[serde(default = "default_max_connections")]
  pub max_connections: u32,
}

/// Default pool size
fn default_max_connections() -> u32 {
  5
}

/// [pagination] section configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
  /// Page size used when the client does not send one
  pub default_page_size: u32,
  /// Requested sizes above this are clamped
  pub max_page_size: u32,
}

impl Default for PaginationConfig {
  fn default() -> Self {
    Self {
      default_page_size: 20,
      max_page_size: 100,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// ===== Accessor Methods =====

impl StoreConfig {
  /// Builds a configuration with default pagination and logging.
  pub fn new(location: DatabaseLocation) -> Self {
    Self {
      database: DatabaseConfig {
        location,
        max_connections: default_max_connections(),
      },
      pagination: PaginationConfig::default(),
      logging: LoggingConfig::default(),
    }
  }

  /// Returns the database location.
  pub fn database_location(&self) -> &DatabaseLocation {
    &self.database.location
  }

  /// Returns the database file path, `None` for in-memory databases.
  pub fn database_path(&self) -> Option<&Path> {
    match &self.database.location {
      DatabaseLocation::File(path) => Some(path),
      DatabaseLocation::InMemory => None,
    }
  }

  /// Returns the effective pool size.
  ///
  /// An in-memory database is private to one connection, so the pool is pinned to 1.
  pub fn max_connections(&self) -> u32 {
    match self.database.location {
      DatabaseLocation::InMemory => 1,
      DatabaseLocation::File(_) => self.database.max_connections,
    }
  }

  /// Returns the default page size.
  pub fn default_page_size(&self) -> u32 {
    self.pagination.default_page_size
  }

  /// Returns the maximum page size.
  pub fn max_page_size(&self) -> u32 {
    self.pagination.max_page_size
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `pagination.default_page_size` >= 1
  /// - `pagination.max_page_size` >= `pagination.default_page_size`
  /// - `database.max_connections` >= 1
  /// - database file path is not a directory, and its parent exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.pagination.default_page_size < 1 {
      return Err(ConfigError::InvalidDefaultPageSize {
        actual: self.pagination.default_page_size,
      });
    }

    if self.pagination.max_page_size < self.pagination.default_page_size {
      return Err(ConfigError::InvalidMaxPageSize {
        default_page_size: self.pagination.default_page_size,
        max_page_size: self.pagination.max_page_size,
      });
    }

    if self.database.max_connections < 1 {
      return Err(ConfigError::InvalidMaxConnections {
        actual: self.database.max_connections,
      });
    }

    if let DatabaseLocation::File(path) = &self.database.location {
      if path.is_dir() {
        return Err(ConfigError::DatabasePathIsDirectory { path: path.clone() });
      }

      // parent directory exists or can be created
      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
          return Err(ConfigError::DatabaseDirCreationFailed {
            path: parent.to_path_buf(),
            source: Arc::new(e),
          });
        }
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
