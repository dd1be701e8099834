//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_check};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/check", post(post_check))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;
  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use hanspell::{CorrectionResult, HanspellResult, SpellChecker};
  use tower::ServiceExt;

  use super::*;
  use crate::config::Config;

  /// テスト用のダミー実装（speller を一切呼ばない）
  struct DummyChecker;

  #[async_trait]
  impl SpellChecker for DummyChecker {
    async fn check(&self, text: &str) -> HanspellResult<CorrectionResult> {
      Ok(CorrectionResult::unchanged(text))
    }
  }

  fn create_test_state() -> AppState {
    let config = Config::from_lookup(|_| None).unwrap();

    // スタブを注入（ネットワーク不要）
    AppState::with_checker(config, Arc::new(DummyChecker))
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // ルーターが正常に作成できることを確認
  }

  #[tokio::test]
  async fn unknown_route_is_not_found() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().uri("/unknown").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn get_on_check_is_method_not_allowed() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().uri("/check").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
  }
}
