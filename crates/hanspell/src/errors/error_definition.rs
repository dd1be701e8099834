//! エラー定義

use std::sync::Arc;
use thiserror::Error;

/// クライアント設定（HanspellConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// URL として解釈できない、または http(s) ではない
  #[error("{field} は有効な http:// または https:// の URL である必要があります: actual={actual:?}")]
  InvalidUrl {
    /// 設定項目名
    field: &'static str,
    /// 実際に指定された値
    actual: String,
  },

  /// passport_key が空文字列
  #[error("passport_key が空です。未指定にする場合は None を使用してください")]
  EmptyPassportKey,

  /// timeout が 0
  #[error("timeout は 0 より大きい必要があります")]
  ZeroTimeout,

  /// reqwest::Client の構築に失敗
  #[error("HTTP クライアントの構築に失敗しました: {0}")]
  ClientBuild(Arc<reqwest::Error>),
}

/// 統合エラー
///
/// `SpellChecker::check` が返すエラーはすべてこの型になる。
/// API 層ではどのバリアントも「外部スペルチェッカーの呼び出し失敗」として同じように扱う。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum HanspellError {
  /// 通信エラー（接続失敗、タイムアウト、ボディ読み取り失敗など）
  #[error("{0}")]
  Http(Arc<reqwest::Error>),

  /// 2xx 以外のステータスコード
  #[error("speller responded with HTTP {status}")]
  Status {
    /// 返されたステータスコード
    status: u16,
  },

  /// 検索ページから passportKey を取り出せなかった
  #[error("passportKey not found on {url}")]
  PassportKeyNotFound {
    /// 取得したページの URL
    url: String,
  },

  /// JSONP / JSON として解釈できないレスポンス
  #[error("invalid speller response: {reason}")]
  InvalidResponse {
    /// 解釈に失敗した理由
    reason: String,
  },

  /// サービス側がエラーを報告した（passportKey の失効など）
  #[error("speller error: {message}")]
  Service {
    /// サービスが返したメッセージ
    message: String,
  },

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Naver 以外の SpellChecker 実装が報告するエラー（メッセージをそのまま表示）
  #[error("{0}")]
  Backend(String),
}

impl HanspellError {
  /// バックエンドエラーを作成
  #[must_use]
  pub fn backend(message: impl Into<String>) -> Self {
    Self::Backend(message.into())
  }

  /// JSONP / JSON 解釈エラーを作成
  #[must_use]
  pub fn invalid_response(reason: impl Into<String>) -> Self {
    Self::InvalidResponse {
      reason: reason.into(),
    }
  }
}

/// リクエスト URL（passportKey と検査対象テキストを含む）は保持しない
impl From<reqwest::Error> for HanspellError {
  fn from(err: reqwest::Error) -> Self {
    Self::Http(Arc::new(err.without_url()))
  }
}

impl From<serde_json::Error> for HanspellError {
  fn from(err: serde_json::Error) -> Self {
    Self::invalid_response(err.to_string())
  }
}

/// hanspell クレートの標準 Result 型エイリアス
pub type HanspellResult<T> = Result<T, HanspellError>;
