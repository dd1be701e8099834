//! SpellChecker: スペルチェック機能の抽象化
//!
//! HTTP 層はこの trait だけに依存する。
//! 本番では [`NaverSpellChecker`](crate::naver::NaverSpellChecker)、
//! テストではスタブ実装を `Arc<dyn SpellChecker>` として注入する。

use async_trait::async_trait;

use crate::errors::HanspellResult;
use crate::models::CorrectionResult;

/// Korean spellcheck capability
#[async_trait]
pub trait SpellChecker: Send + Sync {
  /// Checks `text` and returns the corrected text with the number of corrections.
  ///
  /// `text` is passed through unmodified; no length or content validation happens
  /// before this call.
  ///
  /// # Errors
  /// Any failure to obtain a correction (network failure, malformed response,
  /// service unavailable).
  async fn check(&self, text: &str) -> HanspellResult<CorrectionResult>;
}
