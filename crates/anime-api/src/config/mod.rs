//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use env::Config;
