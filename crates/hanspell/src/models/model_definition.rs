//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Classification of a single word in the corrected text.
///
/// The speller wraps every corrected word in `<em class='...'>`; the class name
/// tells which kind of correction was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
  /// No correction
  Passed,
  /// Misspelling (`red_text`)
  WrongSpelling,
  /// Wrong word spacing (`green_text`)
  WrongSpacing,
  /// Suspected error, correction is a guess (`violet_text`)
  Ambiguous,
  /// Correction based on usage statistics (`blue_text`)
  StatisticalCorrection,
}

impl WordStatus {
  /// Maps the speller's `<em>` class name to a status.
  ///
  /// Unknown class names are reported as `Passed`.
  pub fn from_class(class: &str) -> Self {
    match class {
      "red_text" => Self::WrongSpelling,
      "green_text" => Self::WrongSpacing,
      "violet_text" => Self::Ambiguous,
      "blue_text" => Self::StatisticalCorrection,
      _ => Self::Passed,
    }
  }

  /// Whether this word was changed by the speller
  pub fn is_corrected(&self) -> bool {
    !matches!(self, Self::Passed)
  }
}

/// One whitespace-delimited word of the corrected text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedWord {
  /// Word as it appears in the corrected text
  pub word: String,
  /// Correction applied to the word
  pub status: WordStatus,
}

impl CheckedWord {
  /// Constructor for CheckedWord
  pub fn new(word: impl Into<String>, status: WordStatus) -> Self {
    Self {
      word: word.into(),
      status,
    }
  }
}

/// Result of one spellcheck call
///
/// `checked` and `errors` are what the HTTP layer exposes; `words` and
/// `elapsed_ms` are kept for library callers and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
  /// Text as submitted
  pub original: String,

  /// Corrected text
  pub checked: String,

  /// Number of corrections made (`errata_count` summed over all chunks)
  pub errors: usize,

  /// Corrected text split into words with their status
  #[serde(default)]
  pub words: Vec<CheckedWord>,

  /// Time spent waiting on the speller (milliseconds)
  pub elapsed_ms: u64,
}

impl CorrectionResult {
  /// Result for a text the speller did not change
  pub fn unchanged(text: impl Into<String>) -> Self {
    let text = text.into();
    let words = text.split_whitespace().map(|w| CheckedWord::new(w, WordStatus::Passed)).collect();

    Self {
      checked: text.clone(),
      original: text,
      errors: 0,
      words,
      elapsed_ms: 0,
    }
  }

  /// True when the speller made no corrections
  pub fn is_unchanged(&self) -> bool {
    self.errors == 0
  }

  /// Words the speller changed
  pub fn corrected_words(&self) -> impl Iterator<Item = &CheckedWord> {
    self.words.iter().filter(|w| w.status.is_corrected())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_status_from_class() {
    assert_eq!(WordStatus::from_class("red_text"), WordStatus::WrongSpelling);
    assert_eq!(WordStatus::from_class("green_text"), WordStatus::WrongSpacing);
    assert_eq!(WordStatus::from_class("violet_text"), WordStatus::Ambiguous);
    assert_eq!(
      WordStatus::from_class("blue_text"),
      WordStatus::StatisticalCorrection
    );
    assert_eq!(WordStatus::from_class("unknown"), WordStatus::Passed);
  }

  #[test]
  fn unchanged_keeps_text_and_zero_errors() {
    let result = CorrectionResult::unchanged("오늘 날씨가 좋아요");

    assert_eq!(result.original, "오늘 날씨가 좋아요");
    assert_eq!(result.checked, "오늘 날씨가 좋아요");
    assert_eq!(result.errors, 0);
    assert!(result.is_unchanged());
    assert_eq!(result.words.len(), 3);
    assert_eq!(result.corrected_words().count(), 0);
  }

  #[test]
  fn corrected_words_skips_passed() {
    let mut result = CorrectionResult::unchanged("나는 밥을먹었다");
    result.checked = "나는 밥을 먹었다".to_string();
    result.errors = 1;
    result.words = vec![
      CheckedWord::new("나는", WordStatus::Passed),
      CheckedWord::new("밥을", WordStatus::WrongSpacing),
      CheckedWord::new("먹었다", WordStatus::WrongSpacing),
    ];

    let corrected: Vec<&str> = result.corrected_words().map(|w| w.word.as_str()).collect();
    assert_eq!(corrected, vec!["밥을", "먹었다"]);
    assert!(!result.is_unchanged());
  }

  #[test]
  fn word_status_serializes_snake_case() {
    let json = serde_json::to_string(&WordStatus::WrongSpacing).unwrap();
    assert_eq!(json, "\"wrong_spacing\"");
  }
}
