//! NaverSpellChecker: Naver 맞춤법 검사기 client
//!
//! Flow per `check` call:
//! 1. Resolve the passport key (configured, cached, or scraped from the search page)
//! 2. Split the text into chunks of at most [`MAX_CHUNK_CHARS`] characters
//! 3. Request each chunk, parse the JSONP response, render the markup
//! 4. Join the corrected chunks and sum `errata_count`
//!
//! A failed call is not retried. If the speller reports an error, a scraped
//! passport key is dropped so the next call scrapes a fresh one.

use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::REFERER;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::chunk::split_chunks;
use super::html::{RenderedHtml, render_html};
use super::response::parse_speller_response;
use crate::checker::SpellChecker;
use crate::config::{HanspellConfig, MAX_CHUNK_CHARS, SPELLER_REFERER};
use crate::errors::{ConfigError, HanspellError, HanspellResult};
use crate::models::CorrectionResult;

/// JSONP callback name sent as `_callback`
const JSONP_CALLBACK: &str = "window.__jindo2_callback._spellingCheck_0";

/// `passportKey=<value>` as embedded in the search page
static PASSPORT_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"passportKey=([^&"'\s\\]+)"#).expect("passport key pattern is valid")
});

/// Spellchecker backed by the Naver speller web service
pub struct NaverSpellChecker {
  client: reqwest::Client,
  config: HanspellConfig,
  /// Passport key in use (configured or last scraped)
  passport_key: RwLock<Option<String>>,
}

impl NaverSpellChecker {
  /// Creates a client from a validated configuration.
  ///
  /// # Errors
  /// Returns `HanspellError::Config` if the configuration is invalid or the
  /// HTTP client cannot be built.
  pub fn new(config: HanspellConfig) -> HanspellResult<Self> {
    config.validate()?;

    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(|e| ConfigError::ClientBuild(Arc::new(e)))?;

    Ok(Self {
      client,
      passport_key: RwLock::new(config.passport_key.clone()),
      config,
    })
  }

  /// Returns the configuration this client was built with
  pub fn config(&self) -> &HanspellConfig {
    &self.config
  }

  /// Returns the passport key, scraping the search page on first use.
  ///
  /// The lock is never held across the scrape. Concurrent first calls may each
  /// scrape; the first key stored wins.
  async fn passport_key(&self) -> HanspellResult<String> {
    if let Some(key) = self.passport_key.read().await.as_ref() {
      return Ok(key.clone());
    }

    let scraped = self.fetch_passport_key().await?;

    let mut slot = self.passport_key.write().await;
    Ok(slot.get_or_insert(scraped).clone())
  }

  /// Drops a scraped passport key. A configured key is kept.
  async fn forget_passport_key(&self) {
    if self.config.passport_key.is_none() {
      *self.passport_key.write().await = None;
    }
  }

  async fn fetch_passport_key(&self) -> HanspellResult<String> {
    let url = &self.config.passport_page_url;
    debug!(url = %url, "passportKey を取得します");

    let response = self.client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
      return Err(HanspellError::Status {
        status: status.as_u16(),
      });
    }

    let page = response.text().await?;
    extract_passport_key(&page).ok_or_else(|| HanspellError::PassportKeyNotFound {
      url: url.clone(),
    })
  }

  async fn check_chunk(&self, passport_key: &str, chunk: &str) -> HanspellResult<CheckedChunk> {
    let response = self
      .client
      .get(&self.config.speller_url)
      .query(&[
        ("passportKey", passport_key),
        ("_callback", JSONP_CALLBACK),
        ("q", chunk),
        ("where", "nexearch"),
        ("color_blindness", "0"),
      ])
      .header(REFERER, SPELLER_REFERER)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(HanspellError::Status {
        status: status.as_u16(),
      });
    }

    let body = response.text().await?;
    let payload = parse_speller_response(&body)?;
    debug!(
      chunk_chars = chunk.chars().count(),
      errata_count = payload.errata_count,
      "chunk checked"
    );

    Ok(CheckedChunk {
      rendered: render_html(&payload.html),
      errata_count: payload.errata_count,
    })
  }
}

/// Speller output for one chunk
struct CheckedChunk {
  rendered: RenderedHtml,
  /// `errata_count` as reported; the markup only classifies words
  errata_count: usize,
}

#[async_trait]
impl SpellChecker for NaverSpellChecker {
  async fn check(&self, text: &str) -> HanspellResult<CorrectionResult> {
    if text.trim().is_empty() {
      return Ok(CorrectionResult::unchanged(text));
    }

    let start = Instant::now();
    let passport_key = self.passport_key().await?;

    let chunks = split_chunks(text, MAX_CHUNK_CHARS);
    debug!(chunk_count = chunks.len(), text_len = text.len(), "スペルチェックを要求します");

    let mut checked = String::with_capacity(text.len());
    let mut errors = 0;
    let mut words = Vec::new();

    for chunk in chunks {
      if chunk.body.trim().is_empty() {
        checked.push_str(chunk.body);
      } else {
        let checked_chunk = match self.check_chunk(&passport_key, chunk.body).await {
          Ok(checked_chunk) => checked_chunk,
          Err(err) => {
            if matches!(err, HanspellError::Service { .. }) {
              warn!(error = %err, "speller rejected the request, dropping passportKey");
              self.forget_passport_key().await;
            }
            return Err(err);
          }
        };
        checked.push_str(&checked_chunk.rendered.text);
        words.extend(checked_chunk.rendered.words);
        errors += checked_chunk.errata_count;
      }
      checked.push_str(chunk.separator);
    }

    Ok(CorrectionResult {
      original: text.to_string(),
      checked,
      errors,
      words,
      elapsed_ms: saturating_millis(start.elapsed()),
    })
  }
}

/// Milliseconds in `elapsed`, clamped to `u64::MAX`
fn saturating_millis(elapsed: Duration) -> u64 {
  u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Finds `passportKey=<value>` in the search page HTML.
pub fn extract_passport_key(page: &str) -> Option<String> {
  PASSPORT_KEY_PATTERN
    .captures(page)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
}
