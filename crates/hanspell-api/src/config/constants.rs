//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 全インターフェースのポート 5000 で待ち受ける。
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// バインドアドレスの環境変数名
pub const ENV_BIND_ADDR: &str = "HANSPELL_API_BIND_ADDR";

/// speller エンドポイント URL の環境変数名
pub const ENV_SPELLER_URL: &str = "HANSPELL_SPELLER_URL";

/// passportKey を取得する検索ページ URL の環境変数名
pub const ENV_PASSPORT_PAGE_URL: &str = "HANSPELL_PASSPORT_PAGE_URL";

/// 固定 passportKey の環境変数名（未設定なら検索ページから取得）
pub const ENV_PASSPORT_KEY: &str = "HANSPELL_PASSPORT_KEY";

/// speller 呼び出しのタイムアウト（秒）の環境変数名（未設定ならタイムアウトなし）
pub const ENV_TIMEOUT_SECS: &str = "HANSPELL_TIMEOUT_SECS";
