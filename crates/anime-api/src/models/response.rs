//! Response Model Definition

use serde::Serialize;

use anime_store::{Anime, Page};

/// Anime as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimeResponse {
  /// Store-generated identifier
  pub id: Option<i64>,
  /// Title
  pub name: String,
}

impl From<Anime> for AnimeResponse {
  fn from(anime: Anime) -> Self {
    Self {
      id: anime.id,
      name: anime.name,
    }
  }
}

/// Paged listing response
///
/// Flattens [`Page`] together with its derived metadata so clients do not
/// have to recompute page counts.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
  /// Records on this page
  pub content: Vec<T>,
  /// Page index (0-based)
  pub number: u32,
  /// Requested page size
  pub size: u32,
  /// Total number of records
  pub total_elements: u64,
  /// Total number of pages
  pub total_pages: u64,
  /// Records on this page
  pub number_of_elements: usize,
  /// First page flag
  pub first: bool,
  /// Last page flag
  pub last: bool,
  /// Empty page flag
  pub empty: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
  fn from(page: Page<T>) -> Self {
    let total_pages = page.total_pages();
    let number_of_elements = page.number_of_elements();
    let first = page.is_first();
    let last = page.is_last();
    let empty = page.is_empty();

    Self {
      content: page.content,
      number: page.number,
      size: page.size,
      total_elements: page.total_elements,
      total_pages,
      number_of_elements,
      first,
      last,
      empty,
    }
  }
}
