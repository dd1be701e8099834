//! hanspell-api サーバーエントリーポイント

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hanspell_api::ApiError;
use hanspell_api::api::AppState;
use hanspell_api::api::run_server;
use hanspell_api::config::Config;
use hanspell_api::service::SpellcheckApiService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時のデフォルトフィルター）
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,hanspell=debug,hanspell_api=debug"));
  tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    speller_url = %config.speller.speller_url,
    fixed_passport_key = config.speller.passport_key.is_some(),
    timeout = ?config.speller.timeout,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = SpellcheckApiService::from_config(&config)?;
  tracing::info!("スペルチェックサービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
