//! Data Model Definition
use serde::{Deserialize, Serialize};

use crate::errors::{AnimeError, AnimeResult};

/// Maximum number of characters accepted for `name`.
pub const MAX_NAME_LENGTH: usize = 255;

/// Anime record (the only persisted entity)
///
/// `id` is assigned by the store on first save and is `None` until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
  /// Store-generated identifier
  pub id: Option<i64>,

  /// Title
  pub name: String,
}

impl Anime {
  /// Creates a not-yet-persisted record
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      id: None,
      name: name.into(),
    }
  }

  /// Creates a record carrying an existing id
  pub fn with_id(id: i64, name: impl Into<String>) -> Self {
    Self {
      id: Some(id),
      name: name.into(),
    }
  }
}

/// Body of `POST /animes`
///
/// A missing `name` deserializes to an empty string so that it is reported by
/// [`validate`](Self::validate) instead of failing JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimePostRequestBody {
  /// Title of the new record
  #[serde(default)]
  pub name: String,
}

impl AnimePostRequestBody {
  /// Constructor
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  /// Checks required fields.
  ///
  /// # Errors
  /// `AnimeError::Validation` when `name` is blank or too long
  pub fn validate(&self) -> AnimeResult<()> {
    validate_name(&self.name)
  }

  /// Converts into a new, unsaved entity
  pub fn into_anime(self) -> Anime {
    Anime::new(self.name)
  }
}

/// Body of `PUT /animes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimePutRequestBody {
  /// Id of the record to replace
  pub id: i64,

  /// New title
  #[serde(default)]
  pub name: String,
}

impl AnimePutRequestBody {
  /// Constructor
  pub fn new(id: i64, name: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
    }
  }

  /// Checks required fields.
  ///
  /// # Errors
  /// `AnimeError::Validation` when `name` is blank or too long
  pub fn validate(&self) -> AnimeResult<()> {
    validate_name(&self.name)
  }

  /// Overlays this body onto a loaded entity, keeping the entity's id
  pub fn apply_to(self, mut anime: Anime) -> Anime {
    anime.name = self.name;
    anime
  }
}

fn validate_name(name: &str) -> AnimeResult<()> {
  if name.trim().is_empty() {
    return Err(AnimeError::validation("name", "The anime name cannot be empty"));
  }

  let length = name.chars().count();
  if length > MAX_NAME_LENGTH {
    return Err(AnimeError::validation(
      "name",
      format!("The anime name must be at most {MAX_NAME_LENGTH} characters (got {length})"),
    ));
  }

  Ok(())
}
