//! Path tokenizer: turns the text after a stage's leading `.` into segments.
//!
//! # Grammar
//!
//! - `name` / `.name` -- a bare word becomes [`PathSegment::Key`]
//! - `[3]` -- ASCII digits in brackets become [`PathSegment::Index`]
//! - `[]` -- empty brackets become [`PathSegment::Iterate`]
//!
//! Dots only separate words; empty words (`a..b`, a trailing `.`) produce
//! no segment. There is no quoting, so keys containing `.`, `[` or `]`
//! cannot be expressed.

use crate::error::{FilterError, Result};
use crate::types::PathSegment;

/// Tokenize a path suffix into an ordered segment list.
///
/// An empty suffix yields an empty list, which folds as the identity.
///
/// # Errors
///
/// Returns [`FilterError::MalformedPath`] for an unterminated `[`, a stray
/// `]`, or bracket content that is neither empty nor a non-negative integer.
///
/// # Examples
///
/// ```
/// use treepath_core::{tokenize, PathSegment};
///
/// let segs = tokenize("items[0].name").unwrap();
/// assert_eq!(
///     segs,
///     vec![
///         PathSegment::Key("items".into()),
///         PathSegment::Index(0),
///         PathSegment::Key("name".into()),
///     ]
/// );
/// ```
pub fn tokenize(suffix: &str) -> Result<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut word = String::new();
    let mut chars = suffix.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => flush_word(&mut word, &mut segments),
            '[' => {
                flush_word(&mut word, &mut segments);
                let mut content = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ']' {
                        closed = true;
                        break;
                    }
                    content.push(inner);
                }
                if !closed {
                    return Err(malformed(suffix, "unterminated '['"));
                }
                segments.push(bracket_segment(suffix, &content)?);
            }
            ']' => return Err(malformed(suffix, "unexpected ']'")),
            other => word.push(other),
        }
    }
    flush_word(&mut word, &mut segments);

    log::trace!("tokenized {:?} into {:?}", suffix, segments);
    Ok(segments)
}

fn flush_word(word: &mut String, segments: &mut Vec<PathSegment>) {
    if !word.is_empty() {
        segments.push(PathSegment::Key(std::mem::take(word)));
    }
}

/// Classify the raw text between `[` and `]`.
fn bracket_segment(suffix: &str, content: &str) -> Result<PathSegment> {
    if content.is_empty() {
        return Ok(PathSegment::Iterate);
    }
    // `usize::from_str` accepts a leading '+', which the grammar does not.
    if !content.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(
            suffix,
            &format!("'[{}]' is not a non-negative integer index", content),
        ));
    }
    content
        .parse::<usize>()
        .map(PathSegment::Index)
        .map_err(|_| malformed(suffix, &format!("index '{}' is too large", content)))
}

fn malformed(path: &str, reason: &str) -> FilterError {
    FilterError::MalformedPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_word_skips_empty_buffers() {
        let mut word = String::new();
        let mut segs = Vec::new();
        flush_word(&mut word, &mut segs);
        assert!(segs.is_empty());

        word.push_str("a");
        flush_word(&mut word, &mut segs);
        assert_eq!(segs, vec![PathSegment::Key("a".into())]);
        assert!(word.is_empty());
    }

    #[test]
    fn bracket_content_rejects_signs() {
        assert!(bracket_segment("[+1]", "+1").is_err());
        assert!(bracket_segment("[-1]", "-1").is_err());
        assert_eq!(bracket_segment("[07]", "07").unwrap(), PathSegment::Index(7));
    }
}
