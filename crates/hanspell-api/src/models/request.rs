//! リクエストモデル定義

use serde::{Deserialize, Deserializer, de};

/// スペルチェックリクエスト
///
/// `application/x-www-form-urlencoded` の `text` フィールド。
/// 空文字列は欠落と同じく拒否する（Form extractor が 4xx を返す）。
/// 空白のみのテキストや長さの検証は行わず、そのまま speller に渡す。
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
  /// 検査対象のテキスト
  #[serde(deserialize_with = "non_empty_text")]
  pub text: String,
}

fn non_empty_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let text = String::deserialize(deserializer)?;
  if text.is_empty() {
    return Err(de::Error::invalid_length(0, &"a non-empty text field"));
  }
  Ok(text)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "안녕"}"#;
    let req: CheckRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "안녕");
  }

  #[test]
  fn empty_text_is_rejected() {
    let json = r#"{"text": ""}"#;
    assert!(serde_json::from_str::<CheckRequest>(json).is_err());
  }

  #[test]
  fn whitespace_text_is_kept() {
    let json = r#"{"text": "  "}"#;
    let req: CheckRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "  ");
  }

  #[test]
  fn missing_text_is_rejected() {
    let json = r#"{"foo": "bar"}"#;
    assert!(serde_json::from_str::<CheckRequest>(json).is_err());
  }
}
