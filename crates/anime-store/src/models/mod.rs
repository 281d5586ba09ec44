//! models module
pub mod model_definition;
pub mod pagination;

pub use model_definition::{Anime, AnimePostRequestBody, AnimePutRequestBody, MAX_NAME_LENGTH};
pub use pagination::{Page, PageRequest, Sort, SortDirection, SortField};
