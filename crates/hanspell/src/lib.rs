//! hanspell 韓国語スペルチェックライブラリー
//!
//! Naver の韓国語スペルチェッカー（맞춤법 검사기）を用いてテキストを校正する

/// 検査機能モジュール - SpellChecker trait を定義
pub mod checker;

/// 設定モジュール - HanspellConfig と Naver エンドポイントの定数を定義
pub mod config;

/// エラーモジュール - HanspellError, HanspellResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - CorrectionResult, WordStatus等のデータ構造を定義
pub mod models;

/// Naver モジュール - Naver speller を呼び出す SpellChecker 実装
pub mod naver;

/// 再エクスポート
pub use checker::SpellChecker;
pub use config::HanspellConfig;
pub use errors::{HanspellError, HanspellResult};
pub use models::{CheckedWord, CorrectionResult, WordStatus};
pub use naver::NaverSpellChecker;
