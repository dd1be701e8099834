//! APIエラー定義
//!
//! サーバーの起動・稼働に関するエラーのみを扱う。
//! `/check` での speller 呼び出し失敗はエラーとして伝播させず、
//! [`CheckOutcome::Degraded`](crate::models::CheckOutcome::Degraded) として応答する。

use thiserror::Error;

// hanspell クレートのエラー型をインポート
use hanspell::HanspellError;

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// HanspellError から ApiError への変換
///
/// サービス構築時（NaverSpellChecker::new）のエラーをマッピングする。
impl From<HanspellError> for ApiError {
  fn from(err: HanspellError) -> Self {
    match err {
      HanspellError::Config(err) => ApiError::config(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("speller client error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn internal_creation() {
    let err = ApiError::internal("内部処理エラー");
    assert!(matches!(err, ApiError::Internal(_)));
    assert!(err.to_string().contains("内部処理エラー"));
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("バインドに失敗しました");
    assert!(matches!(err, ApiError::Config(_)));
    assert!(err.to_string().starts_with("設定エラー"));
  }

  #[test]
  fn from_hanspell_config_error() {
    use hanspell::errors::ConfigError;
    let hanspell_err = HanspellError::Config(ConfigError::EmptyPassportKey);
    let api_err: ApiError = hanspell_err.into();
    assert!(matches!(api_err, ApiError::Config(_)));
  }

  #[test]
  fn from_hanspell_runtime_error() {
    let hanspell_err = HanspellError::Status { status: 502 };
    let api_err: ApiError = hanspell_err.into();
    assert!(matches!(api_err, ApiError::Internal(_)));
    assert!(api_err.to_string().contains("502"));
  }
}
