//! Speller response parsing (JSONP → payload).

use serde::Deserialize;

use crate::errors::{HanspellError, HanspellResult};

/// `{"message": {...}}`
#[derive(Debug, Deserialize)]
struct SpellerEnvelope {
  message: SpellerMessage,
}

#[derive(Debug, Deserialize)]
struct SpellerMessage {
  #[serde(default)]
  result: Option<SpellerPayload>,
  #[serde(default)]
  error: Option<String>,
}

/// `message.result` of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpellerPayload {
  /// Corrected text with `<em>` markup
  pub html: String,
  /// Number of corrections
  pub errata_count: usize,
}

/// Extracts the payload from a JSONP (`callback({...});`) or bare JSON body.
///
/// # Errors
/// - `InvalidResponse` if the body is not valid JSON(P) or has no `result`
/// - `Service` if the speller reported an error
pub fn parse_speller_response(body: &str) -> HanspellResult<SpellerPayload> {
  let json = strip_jsonp(body)?;
  let envelope: SpellerEnvelope = serde_json::from_str(json)?;

  if let Some(message) = envelope.message.error {
    return Err(HanspellError::Service { message });
  }

  envelope
    .message
    .result
    .ok_or_else(|| HanspellError::invalid_response("message.result is missing"))
}

fn strip_jsonp(body: &str) -> HanspellResult<&str> {
  let trimmed = body.trim();

  if trimmed.starts_with('{') {
    return Ok(trimmed);
  }

  match (trimmed.find('('), trimmed.rfind(')')) {
    (Some(open), Some(close)) if open < close => Ok(&trimmed[open + 1..close]),
    _ => Err(HanspellError::invalid_response(
      "body is neither JSON nor JSONP",
    )),
  }
}
