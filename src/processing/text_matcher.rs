//! Whole-word, case-insensitive keyword matching over free text

use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// A single compiled keyword.
///
/// Terms are matched literally (regex metacharacters such as `+` or `.` carry
/// no special meaning) and case-insensitively. An occurrence only counts when
/// it is not glued to a neighbouring word character, so `R` does not match
/// inside `Rust` while `C++` still matches in `C++ and C#`. Whitespace inside a
/// multi-word term matches any run of whitespace in the text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    term: String,
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new(term: &str) -> Result<Self> {
        let parts: Vec<String> = term.split_whitespace().map(regex::escape).collect();

        let pattern = if parts.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&parts.join(r"\s+"))
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self {
            term: term.trim().to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Count bounded occurrences of the term in `text`.
    pub fn count(&self, text: &str) -> usize {
        let Some(pattern) = &self.pattern else {
            return 0;
        };

        let mut count = 0;
        let mut position = 0;

        while position <= text.len() {
            let Some(found) = pattern.find_at(text, position) else {
                break;
            };

            if is_bounded(text, found.start(), found.end()) {
                count += 1;
                position = found.end();
            } else {
                // A rejected hit may hide a valid one starting inside it.
                position = next_char_boundary(text, found.start());
            }
        }

        count
    }

    pub fn is_found_in(&self, text: &str) -> bool {
        self.count(text) > 0
    }
}

/// One-shot match count for a single term.
///
/// Prefer a [`KeywordMatcher`] when the same term is matched against many texts.
pub fn count_matches(text: &str, term: &str) -> Result<usize> {
    Ok(KeywordMatcher::new(term)?.count(text))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    match text[index..].chars().next() {
        Some(c) => index + c.len_utf8(),
        None => text.len() + 1,
    }
}
