//! モデルモジュール

mod request;
mod response;

pub use anime_store::{AnimePostRequestBody, AnimePutRequestBody};
pub use request::{NameQuery, PageQuery};
pub use response::{AnimeResponse, PageResponse};
