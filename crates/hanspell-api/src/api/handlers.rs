//! HTTPハンドラー定義

use axum::{Form, extract::State};

use crate::models::{CheckOutcome, CheckRequest};

use super::state::AppState;

/// POST /check エンドポイント
///
/// 韓国語テキストのスペルチェックを実行する。
///
/// # Request Body (application/x-www-form-urlencoded)
/// ```text
/// text=검사할 텍스트
/// ```
///
/// # Response
/// - 200 OK: `{ "corrected", "original", "result": { "errata_count" } }`
/// - 500 Internal Server Error: speller 呼び出し失敗。`{ "corrected" (= original), "original", "error" }`
/// - 4xx: `text` フィールドの欠落・空文字列など。Form extractor が拒否し、このハンドラーは呼ばれない
pub async fn post_check(
  State(state): State<AppState>,
  Form(request): Form<CheckRequest>,
) -> CheckOutcome {
  state.service.check(request).await
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
