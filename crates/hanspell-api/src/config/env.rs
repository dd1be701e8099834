//! Config loading from environment variables

use std::time::Duration;

use hanspell::HanspellConfig;

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_PASSPORT_KEY, ENV_PASSPORT_PAGE_URL, ENV_SPELLER_URL,
  ENV_TIMEOUT_SECS,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:5000")
  pub bind_addr: String,
  /// Naver speller client settings
  pub speller: HanspellConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Unset and empty values both fall back to the default.
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let mut speller = HanspellConfig::default();
    if let Some(url) = get(ENV_SPELLER_URL) {
      speller.speller_url = url;
    }
    if let Some(url) = get(ENV_PASSPORT_PAGE_URL) {
      speller.passport_page_url = url;
    }
    speller.passport_key = get(ENV_PASSPORT_KEY);
    speller.timeout = get(ENV_TIMEOUT_SECS).map(|v| parse_timeout(&v)).transpose()?;

    speller.validate().map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self { bind_addr, speller })
  }
}

fn parse_timeout(value: &str) -> crate::errors::Result<Duration> {
  match value.trim().parse::<u64>() {
    Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
    _ => Err(ApiError::config(format!(
      "{ENV_TIMEOUT_SECS} must be a positive integer: {value}"
    ))),
  }
}
