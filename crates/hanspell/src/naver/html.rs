//! Rendering of the speller's `html` field.
//!
//! The speller marks corrections like
//! `나는 <em class='green_text'>밥을 먹었다</em>`. Rendering removes the markup,
//! turns `<br>` into newlines, unescapes entities, and remembers which
//! characters sat inside which `<em>` class so words can be classified.

use crate::models::{CheckedWord, WordStatus};

/// Plain text plus per-word classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHtml {
  /// Text with markup removed
  pub text: String,
  /// Words of `text` with their status
  pub words: Vec<CheckedWord>,
}

/// Renders speller markup into plain text and classified words.
pub fn render_html(html: &str) -> RenderedHtml {
  let segments = scan_segments(html);

  let mut text = String::with_capacity(html.len());
  let mut words = Vec::new();
  let mut word = String::new();
  let mut word_status = WordStatus::Passed;

  for (segment, status) in &segments {
    for ch in segment.chars() {
      text.push(ch);

      if ch.is_whitespace() {
        if !word.is_empty() {
          words.push(CheckedWord::new(std::mem::take(&mut word), word_status));
        }
        word_status = WordStatus::Passed;
        continue;
      }

      // A word takes the first correction found inside it
      if word_status == WordStatus::Passed {
        word_status = *status;
      }
      word.push(ch);
    }
  }

  if !word.is_empty() {
    words.push(CheckedWord::new(word, word_status));
  }

  RenderedHtml { text, words }
}

/// Splits markup into unescaped text segments tagged with the enclosing `<em>` class.
fn scan_segments(html: &str) -> Vec<(String, WordStatus)> {
  let mut segments = Vec::new();
  let mut status = WordStatus::Passed;
  let mut rest = html;

  while !rest.is_empty() {
    let Some(open) = rest.find('<') else {
      segments.push((unescape(rest), status));
      break;
    };

    if open > 0 {
      segments.push((unescape(&rest[..open]), status));
    }

    let after_open = &rest[open..];
    let Some(close) = after_open.find('>') else {
      // unterminated tag: keep it as text
      segments.push((unescape(after_open), status));
      break;
    };

    let tag = after_open[1..close].trim();
    match tag_name(tag) {
      "em" => status = WordStatus::from_class(class_attr(tag).unwrap_or_default()),
      "/em" => status = WordStatus::Passed,
      "br" => segments.push(("\n".to_string(), status)),
      _ => {}
    }

    rest = &after_open[close + 1..];
  }

  segments
}

fn tag_name(tag: &str) -> &str {
  let name = tag.split(|c: char| c.is_whitespace()).next().unwrap_or_default();
  name.trim_end_matches('/')
}

fn class_attr(tag: &str) -> Option<&str> {
  let start = tag.find("class=")? + "class=".len();
  let value = &tag[start..];
  let quote = value.chars().next()?;

  if quote == '\'' || quote == '"' {
    let inner = &value[1..];
    inner.find(quote).map(|end| &inner[..end])
  } else {
    value.split(|c: char| c.is_whitespace() || c == '/').next()
  }
}

fn unescape(text: &str) -> String {
  if !text.contains('&') {
    return text.to_string();
  }

  text
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&nbsp;", " ")
    .replace("&amp;", "&")
}
