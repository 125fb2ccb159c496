//! Whole-word, case-insensitive text matching.
//!
//! Search words are always treated as literal text: they are escaped before
//! being compiled, so regex metacharacters in user input have no special
//! meaning.

use post_model::{BlogError, Result};
use regex::{Regex, RegexBuilder};

/// Compile a matcher for a single search word.
///
/// The word must be non-blank; it matches only at word boundaries, so
/// "cat" is found in "I have a cat" but not in "concatenate".
pub fn word_matcher(word: &str) -> Result<Regex> {
    if word.trim().is_empty() {
        return Err(BlogError::InvalidArgument(
            "search word must not be blank".into(),
        ));
    }

    let pattern = format!(r"\b{}\b", regex::escape(word));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| BlogError::InvalidArgument(format!("unusable search word {word:?}: {e}")))
}

/// Compile matchers for a whole word list, rejecting any blank entry before
/// the first one is compiled.
pub fn word_matchers(words: &[&str]) -> Result<Vec<Regex>> {
    words.iter().map(|word| word_matcher(word)).collect()
}

/// Whether `word` occurs as a whole word inside `text`, ignoring case.
pub fn contains_word(text: &str, word: &str) -> Result<bool> {
    Ok(word_matcher(word)?.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        assert!(contains_word("I have a cat", "cat").unwrap());
        assert!(!contains_word("concatenate", "cat").unwrap());
        assert!(!contains_word("cats are great", "cat").unwrap());
    }

    #[test]
    fn test_case_insensitive() {
        assert!(contains_word("Rust is great", "RUST").unwrap());
        assert!(contains_word("RUST IS GREAT", "rust").unwrap());
    }

    #[test]
    fn test_word_at_text_boundaries() {
        assert!(contains_word("cat", "cat").unwrap());
        assert!(contains_word("cat naps", "cat").unwrap());
        assert!(contains_word("a fat cat", "cat").unwrap());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(contains_word("is 2+2 four", "2+2").unwrap());
        assert!(!contains_word("224", "2+2").unwrap());
        assert!(contains_word("see a.b here", "a.b").unwrap());
        assert!(!contains_word("see aXb here", "a.b").unwrap());
    }

    #[test]
    fn test_blank_word_rejected() {
        assert!(matches!(
            contains_word("anything", "  "),
            Err(BlogError::InvalidArgument(_))
        ));
        assert!(word_matchers(&["ok", ""]).is_err());
    }
}
