//! Spellcheck Service

use std::sync::Arc;

use hanspell::{NaverSpellChecker, SpellChecker};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::Result;
use crate::models::{CheckOutcome, CheckRequest};

/// Maps one request onto the spellcheck capability
///
/// The checker is injected so production (`NaverSpellChecker`) and test stubs
/// share the same endpoint logic.
#[derive(Clone)]
pub struct SpellcheckApiService {
  checker: Arc<dyn SpellChecker>,
}

impl SpellcheckApiService {
  /// Creates the service around an existing checker
  #[must_use]
  pub fn new(checker: Arc<dyn SpellChecker>) -> Self {
    Self { checker }
  }

  /// Creates the service backed by the Naver speller
  ///
  /// # Arguments
  /// * `config` - Configuration (including speller settings)
  ///
  /// # Errors
  /// Returns an error if the speller client cannot be built
  pub fn from_config(config: &Config) -> Result<Self> {
    let checker = NaverSpellChecker::new(config.speller.clone())?;
    Ok(Self::new(Arc::new(checker)))
  }

  /// Checks the submitted text
  ///
  /// Never fails: a speller error becomes `CheckOutcome::Degraded` carrying
  /// the original text.
  pub async fn check(&self, request: CheckRequest) -> CheckOutcome {
    let CheckRequest { text } = request;
    debug!(text_len = text.len(), "スペルチェックリクエストを受信");

    match self.checker.check(&text).await {
      Ok(result) => {
        info!(
          errata_count = result.errors,
          elapsed_ms = result.elapsed_ms,
          "スペルチェック完了"
        );
        CheckOutcome::corrected(text, result)
      }
      Err(err) => {
        warn!(error = %err, "スペルチェックに失敗したため原文を返します");
        CheckOutcome::degraded(text, &err)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;
  use hanspell::{CorrectionResult, HanspellError, HanspellResult};

  use super::*;

  /// Uppercases ASCII and counts the changed characters
  struct UppercaseChecker;

  #[async_trait]
  impl SpellChecker for UppercaseChecker {
    async fn check(&self, text: &str) -> HanspellResult<CorrectionResult> {
      let mut result = CorrectionResult::unchanged(text);
      result.checked = text.to_ascii_uppercase();
      result.errors = text.chars().filter(char::is_ascii_lowercase).count();
      Ok(result)
    }
  }

  struct FailingChecker;

  #[async_trait]
  impl SpellChecker for FailingChecker {
    async fn check(&self, _text: &str) -> HanspellResult<CorrectionResult> {
      Err(HanspellError::backend("connection refused"))
    }
  }

  fn request(text: &str) -> CheckRequest {
    CheckRequest {
      text: text.to_string(),
    }
  }

  #[tokio::test]
  async fn success_maps_to_corrected() {
    let service = SpellcheckApiService::new(Arc::new(UppercaseChecker));
    let outcome = service.check(request("abc 가")).await;

    let CheckOutcome::Corrected(body) = outcome else {
      panic!("expected corrected outcome");
    };
    assert_eq!(body.corrected, "ABC 가");
    assert_eq!(body.original, "abc 가");
    assert_eq!(body.result.errata_count, 3);
  }

  #[tokio::test]
  async fn failure_maps_to_degraded() {
    let service = SpellcheckApiService::new(Arc::new(FailingChecker));
    let outcome = service.check(request("안녕")).await;

    let CheckOutcome::Degraded(body) = outcome else {
      panic!("expected degraded outcome");
    };
    assert_eq!(body.corrected, "안녕");
    assert_eq!(body.original, "안녕");
    assert_eq!(body.error, "connection refused");
  }

  #[test]
  fn from_config_builds_naver_checker() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert!(SpellcheckApiService::from_config(&config).is_ok());
  }

  // Calls the real Naver speller; opt-in with the with_live_speller_tests feature
  #[tokio::test]
  #[cfg_attr(not(feature = "with_live_speller_tests"), ignore)]
  async fn live_speller_corrects_spacing() {
    let config = Config::from_env().expect("live test needs a valid environment");
    let service = SpellcheckApiService::from_config(&config).unwrap();

    let body = match service.check(request("나는 밥을먹었다")).await {
      CheckOutcome::Corrected(body) => body,
      other => panic!("live speller call failed: {other:?}"),
    };
    assert_eq!(body.original, "나는 밥을먹었다");
    assert!(body.result.errata_count >= 1);
  }
}
