//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_PASSPORT_KEY, ENV_PASSPORT_PAGE_URL, ENV_SPELLER_URL,
  ENV_TIMEOUT_SECS,
};
pub use env::Config;
