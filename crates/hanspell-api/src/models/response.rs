//! Response Model Definition

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use hanspell::{CorrectionResult, HanspellError};
use serde::Serialize;

/// Message used when the speller error renders as an empty string
const FALLBACK_ERROR_MESSAGE: &str = "spellcheck failed";

/// `result` object of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrataSummary {
  /// Number of corrections made
  pub errata_count: usize,
}

/// Body returned with 200 OK
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectedResponse {
  /// Corrected text
  pub corrected: String,
  /// Text as submitted
  pub original: String,
  /// Correction summary
  pub result: ErrataSummary,
}

/// Body returned with 500 when the speller call failed
///
/// `corrected` echoes the original text so the caller still gets usable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegradedResponse {
  /// Same as `original`
  pub corrected: String,
  /// Text as submitted
  pub original: String,
  /// Human-readable failure description (never empty)
  pub error: String,
}

/// Outcome of one `/check` request
///
/// Every speller result maps to exactly one of these; nothing else reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
  /// Speller succeeded
  Corrected(CorrectedResponse),
  /// Speller failed, original text returned
  Degraded(DegradedResponse),
}

impl CheckOutcome {
  /// Builds the success outcome from the speller result
  #[must_use]
  pub fn corrected(original: String, result: CorrectionResult) -> Self {
    Self::Corrected(CorrectedResponse {
      corrected: result.checked,
      original,
      result: ErrataSummary {
        errata_count: result.errors,
      },
    })
  }

  /// Builds the degraded outcome from the speller error
  #[must_use]
  pub fn degraded(original: String, error: &HanspellError) -> Self {
    let mut message = error.to_string();
    if message.trim().is_empty() {
      message = FALLBACK_ERROR_MESSAGE.to_string();
    }

    Self::Degraded(DegradedResponse {
      corrected: original.clone(),
      original,
      error: message,
    })
  }

  /// HTTP status for this outcome
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Corrected(_) => StatusCode::OK,
      Self::Degraded(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Whether the speller call failed
  #[must_use]
  pub fn is_degraded(&self) -> bool {
    matches!(self, Self::Degraded(_))
  }
}

impl IntoResponse for CheckOutcome {
  fn into_response(self) -> Response {
    let status = self.status();
    match self {
      Self::Corrected(body) => (status, Json(body)).into_response(),
      Self::Degraded(body) => (status, Json(body)).into_response(),
    }
  }
}
