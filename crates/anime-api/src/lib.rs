//! anime-api crate
//!
//! Web server exposing the anime catalog as an HTTP API.
//!
//! ## Endpoints
//! - `GET /animes?page=&size=&sort=` - Paged listing
//! - `GET /animes/all` - Unpaged listing
//! - `GET /animes/{id}` - Find by id
//! - `GET /animes/find?name=` - Find by exact name
//! - `POST /animes` - Create
//! - `PUT /animes` - Replace
//! - `DELETE /animes/{id}` - Delete
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/animes \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "DBZ"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnimePostRequestBody, AnimePutRequestBody, AnimeResponse, PageResponse};
pub use service::{AnimeApiService, AnimeApiServiceFull};
