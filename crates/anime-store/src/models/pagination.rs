//! Pagination types: PageRequest (input) and Page (output)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::errors::{AnimeError, AnimeResult};

/// Column a page is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
  /// Primary key (insertion order)
  #[default]
  Id,
  /// Title
  Name,
}

impl SortField {
  /// Column name in the `anime` table
  pub fn column(&self) -> &'static str {
    match self {
      SortField::Id => "id",
      SortField::Name => "name",
    }
  }
}

/// Ordering direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  /// Ascending
  #[default]
  Asc,
  /// Descending
  Desc,
}

impl SortDirection {
  /// SQL keyword
  pub fn keyword(&self) -> &'static str {
    match self {
      SortDirection::Asc => "ASC",
      SortDirection::Desc => "DESC",
    }
  }
}

/// Sort order of a page, written as `field[,asc|desc]` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
  /// Column
  pub field: SortField,
  /// Direction
  pub direction: SortDirection,
}

impl Sort {
  /// Ascending by the given field
  pub fn asc(field: SortField) -> Self {
    Self {
      field,
      direction: SortDirection::Asc,
    }
  }

  /// Descending by the given field
  pub fn desc(field: SortField) -> Self {
    Self {
      field,
      direction: SortDirection::Desc,
    }
  }
}

impl FromStr for Sort {
  type Err = AnimeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut parts = s.split(',').map(str::trim);

    let field = match parts.next().map(str::to_lowercase).as_deref() {
      Some("id") => SortField::Id,
      Some("name") => SortField::Name,
      _ => {
        return Err(AnimeError::validation(
          "sort",
          format!("Unknown sort field in '{s}'. Valid fields: id, name"),
        ));
      }
    };

    let direction = match parts.next().map(str::to_lowercase).as_deref() {
      None | Some("asc") => SortDirection::Asc,
      Some("desc") => SortDirection::Desc,
      Some(other) => {
        return Err(AnimeError::validation(
          "sort",
          format!("Unknown sort direction '{other}'. Valid values: asc, desc"),
        ));
      }
    };

    if parts.next().is_some() {
      return Err(AnimeError::validation(
        "sort",
        format!("Expected 'field[,direction]', got '{s}'"),
      ));
    }

    Ok(Self { field, direction })
  }
}

/// Requested slice of a listing (0-based page index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  page: u32,
  size: u32,
  sort: Sort,
}

impl PageRequest {
  /// Builds a page request sorted by id ascending.
  ///
  /// # Errors
  /// `AnimeError::Validation` if `size` is 0
  pub fn of(page: u32, size: u32) -> AnimeResult<Self> {
    if size == 0 {
      return Err(AnimeError::validation("size", "Page size must be at least 1"));
    }
    Ok(Self {
      page,
      size,
      sort: Sort::default(),
    })
  }

  /// Resolves optional client parameters against the configured limits.
  ///
  /// A missing `size` falls back to `default_page_size`, and sizes above
  /// `max_page_size` are clamped to it.
  ///
  /// # Errors
  /// `AnimeError::Validation` for `size=0` or an unparsable `sort`
  pub fn resolve(
    page: Option<u32>,
    size: Option<u32>,
    sort: Option<&str>,
    limits: &PaginationConfig,
  ) -> AnimeResult<Self> {
    let size = size.unwrap_or(limits.default_page_size).min(limits.max_page_size);
    let sort = match sort {
      Some(s) if !s.trim().is_empty() => s.parse()?,
      _ => Sort::default(),
    };
    Ok(Self::of(page.unwrap_or(0), size)?.with_sort(sort))
  }

  /// Replaces the sort order
  #[must_use]
  pub fn with_sort(mut self, sort: Sort) -> Self {
    self.sort = sort;
    self
  }

  /// Page index
  pub fn page(&self) -> u32 {
    self.page
  }

  /// Page size
  pub fn size(&self) -> u32 {
    self.size
  }

  /// Sort order
  pub fn sort(&self) -> Sort {
    self.sort
  }

  /// Number of rows to skip
  pub fn offset(&self) -> u64 {
    u64::from(self.page) * u64::from(self.size)
  }
}

/// One page of results plus the metadata clients need to paginate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
  /// Records on this page
  pub content: Vec<T>,
  /// Page index (0-based)
  pub number: u32,
  /// Requested page size
  pub size: u32,
  /// Total number of records across all pages
  pub total_elements: u64,
}

impl<T> Page<T> {
  /// Assembles a page for the given request
  pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
    Self {
      content,
      number: request.page(),
      size: request.size(),
      total_elements,
    }
  }

  /// Total number of pages (0 when there are no records)
  pub fn total_pages(&self) -> u64 {
    if self.size == 0 {
      return 0;
    }
    self.total_elements.div_ceil(u64::from(self.size))
  }

  /// Number of records on this page
  pub fn number_of_elements(&self) -> usize {
    self.content.len()
  }

  /// Whether this is the first page
  pub fn is_first(&self) -> bool {
    self.number == 0
  }

  /// Whether no page follows this one
  pub fn is_last(&self) -> bool {
    u64::from(self.number) + 1 >= self.total_pages()
  }

  /// Whether this page holds no records
  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }

  /// Converts the content, keeping the metadata
  pub fn map<U, F>(self, f: F) -> Page<U>
  where
    F: FnMut(T) -> U,
  {
    Page {
      content: self.content.into_iter().map(f).collect(),
      number: self.number,
      size: self.size,
      total_elements: self.total_elements,
    }
  }
}
