//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{delete, find_by_id, find_by_name, health_check, list, list_all, replace, save};
pub use routes::{create_router, run_server};
pub use state::AppState;
