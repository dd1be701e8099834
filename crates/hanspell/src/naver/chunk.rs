//! Splitting of long input into speller-sized chunks.

/// One piece of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
  /// Text sent to the speller
  pub body: &'a str,
  /// Whitespace that followed `body` in the input, re-inserted after the corrected body
  pub separator: &'a str,
}

/// Splits `text` into chunks of at most `max_chars` characters.
///
/// A chunk ends at the last whitespace run before the limit when there is one;
/// otherwise it is cut at exactly `max_chars` characters. Concatenating
/// `body + separator` of every chunk gives back `text`.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<Chunk<'_>> {
  let max_chars = max_chars.max(1);
  let mut chunks = Vec::new();
  let mut rest = text;

  while !rest.is_empty() {
    // byte offset of the first character past the limit
    let Some((limit, _)) = rest.char_indices().nth(max_chars) else {
      chunks.push(Chunk {
        body: rest,
        separator: "",
      });
      break;
    };

    let cut = if rest[limit..].starts_with(char::is_whitespace) {
      Some(limit)
    } else {
      rest[..limit].rfind(char::is_whitespace)
    };

    let body_end = cut.map_or(0, |c| rest[..c].trim_end().len());

    let chunk = if body_end == 0 {
      Chunk {
        body: &rest[..limit],
        separator: "",
      }
    } else {
      let after_body = &rest[body_end..];
      let separator_len = after_body.len() - after_body.trim_start().len();
      Chunk {
        body: &rest[..body_end],
        separator: &after_body[..separator_len],
      }
    };

    rest = &rest[chunk.body.len() + chunk.separator.len()..];
    chunks.push(chunk);
  }

  chunks
}
