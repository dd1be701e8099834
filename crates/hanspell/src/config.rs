// crates/hanspell/src/config.rs

use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;

/// Naver speller endpoint (JSONP).
pub const DEFAULT_SPELLER_URL: &str =
  "https://m.search.naver.com/p/csearch/ocontent/util/SpellerProxy";

/// Search results page for "맞춤법검사기".
///
/// The page embeds the `passportKey` the speller endpoint requires.
pub const DEFAULT_PASSPORT_PAGE_URL: &str = "https://search.naver.com/search.naver?where=nexearch&sm=top_hty&fbm=0&ie=utf8&query=%EB%A7%9E%EC%B6%A4%EB%B2%95%EA%B2%80%EC%82%AC%EA%B8%B0";

/// Referer sent with every speller request.
pub const SPELLER_REFERER: &str = "https://search.naver.com/";

/// Browser User-Agent. The speller rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Maximum number of characters the speller accepts per request.
pub const MAX_CHUNK_CHARS: usize = 500;

/// Configuration for [`NaverSpellChecker`](crate::naver::NaverSpellChecker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanspellConfig {
  /// Speller endpoint URL
  pub speller_url: String,

  /// Page scraped for `passportKey` when `passport_key` is `None`
  pub passport_page_url: String,

  /// Fixed passport key.
  ///
  /// When set, the search page is never scraped.
  pub passport_key: Option<String>,

  /// User-Agent header value
  pub user_agent: String,

  /// Per-request timeout.
  ///
  /// `None` means no timeout: a hung speller hangs only the request waiting on it.
  pub timeout: Option<Duration>,
}

impl Default for HanspellConfig {
  fn default() -> Self {
    Self {
      speller_url: DEFAULT_SPELLER_URL.to_string(),
      passport_page_url: DEFAULT_PASSPORT_PAGE_URL.to_string(),
      passport_key: None,
      user_agent: DEFAULT_USER_AGENT.to_string(),
      timeout: None,
    }
  }
}

impl HanspellConfig {
  /// Builder that sets a fixed passport key
  #[must_use]
  pub fn with_passport_key(mut self, key: impl Into<String>) -> Self {
    self.passport_key = Some(key.into());
    self
  }

  /// Builder that sets the request timeout
  #[must_use]
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `speller_url` and `passport_page_url` are http(s) URLs
  /// - `passport_key`, if set, is not empty
  /// - `timeout`, if set, is not zero
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    check_url("speller_url", &self.speller_url)?;
    check_url("passport_page_url", &self.passport_page_url)?;

    if matches!(&self.passport_key, Some(key) if key.trim().is_empty()) {
      return Err(ConfigError::EmptyPassportKey);
    }

    if self.timeout == Some(Duration::ZERO) {
      return Err(ConfigError::ZeroTimeout);
    }

    Ok(())
  }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
  match Url::parse(value) {
    Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
    _ => Err(ConfigError::InvalidUrl {
      field,
      actual: value.to_string(),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    let config = HanspellConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.passport_key.is_none());
    assert!(config.timeout.is_none());
  }

  #[test]
  fn validate_rejects_non_http_url() {
    let config = HanspellConfig {
      speller_url: "ftp://example.com".to_string(),
      ..HanspellConfig::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::InvalidUrl {
        field: "speller_url",
        ..
      }
    ));
  }

  #[test]
  fn validate_rejects_scheme_without_host() {
    let config = HanspellConfig {
      passport_page_url: "https://".to_string(),
      ..HanspellConfig::default()
    };

    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidUrl {
        field: "passport_page_url",
        ..
      })
    ));
  }

  #[test]
  fn validate_rejects_unparseable_host() {
    for url in ["http://exa mple.com/speller", "https://[::1/page", "http://:80/"] {
      let config = HanspellConfig {
        speller_url: url.to_string(),
        ..HanspellConfig::default()
      };

      assert!(
        matches!(
          config.validate(),
          Err(ConfigError::InvalidUrl {
            field: "speller_url",
            ..
          })
        ),
        "url: {url}"
      );
    }
  }

  #[test]
  fn validate_accepts_localhost_with_port() {
    let config = HanspellConfig {
      speller_url: "http://127.0.0.1:9000/speller".to_string(),
      passport_page_url: "http://localhost:9000/page?q=1".to_string(),
      ..HanspellConfig::default()
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_blank_passport_key() {
    let config = HanspellConfig::default().with_passport_key("  ");
    assert!(matches!(
      config.validate(),
      Err(ConfigError::EmptyPassportKey)
    ));
  }

  #[test]
  fn validate_rejects_zero_timeout() {
    let config = HanspellConfig::default().with_timeout(Duration::ZERO);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
  }

  #[test]
  fn builders_set_fields() {
    let config = HanspellConfig::default()
      .with_passport_key("abc123")
      .with_timeout(Duration::from_secs(5));

    assert_eq!(config.passport_key.as_deref(), Some("abc123"));
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert!(config.validate().is_ok());
  }
}
