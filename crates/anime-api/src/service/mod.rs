//! Service module

mod anime_api_service;

pub use anime_api_service::{AnimeApiService, AnimeApiServiceFull};
