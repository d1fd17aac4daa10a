//! Separators that split a content chunk into segments
//!
//! Splitting follows the semantics of JavaScript's `String.prototype.split`,
//! which is what markup authors expect when they hand a separator to the
//! segmenter:
//!
//! - a non-empty literal splits at every occurrence and keeps empty segments
//!   between adjacent separators;
//! - an empty literal splits into individual characters;
//! - a regular expression splits at its leftmost matches and splices the
//!   text of its capture groups into the result.

use crate::api::Error;
use regex::Regex;
use std::fmt;

/// A text-splitting capability.
///
/// Implemented for literal separators (`str`, `String`, `char`) and for
/// compiled regular expressions.
pub trait Separator {
    /// Split `text` into ordered segments.
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

impl<T: Separator + ?Sized> Separator for &T {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        (**self).split_segments(text)
    }
}

impl Separator for str {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.is_empty() {
            return split_chars(text);
        }
        text.split(self).collect()
    }
}

impl Separator for String {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.as_str().split_segments(text)
    }
}

impl Separator for char {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(*self).collect()
    }
}

impl Separator for Regex {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if text.is_empty() {
            return if self.is_match(text) {
                Vec::new()
            } else {
                vec![text]
            };
        }

        let mut segments = Vec::new();
        let mut last = 0;
        let mut cursor = 0;

        while cursor < text.len() {
            let Some(captures) = self.captures_at(text, cursor) else {
                break;
            };
            let Some(whole) = captures.get(0) else {
                break;
            };
            if whole.start() >= text.len() {
                break;
            }

            // An empty match sitting on the previous split point would loop
            // forever; step over one character instead.
            if whole.end() == last {
                cursor = next_char_boundary(text, whole.start());
                continue;
            }

            segments.push(&text[last..whole.start()]);
            segments.extend(
                captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or("", |m| m.as_str())),
            );
            last = whole.end();
            cursor = last;
        }

        segments.push(&text[last..]);
        segments
    }
}

fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(offset, ch)| &text[offset..offset + ch.len_utf8()])
        .collect()
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    text[offset..]
        .chars()
        .next()
        .map_or(text.len(), |ch| offset + ch.len_utf8())
}

/// Owned separator held by a segmenter configuration.
#[derive(Debug, Clone)]
pub enum SeparatorSpec {
    /// Split on every occurrence of a literal substring
    Literal(String),
    /// Split on matches of a compiled regular expression
    Pattern(Regex),
}

impl SeparatorSpec {
    /// Literal separator
    pub fn literal(separator: impl Into<String>) -> Self {
        SeparatorSpec::Literal(separator.into())
    }

    /// Compile a regular-expression separator
    pub fn pattern(pattern: &str) -> Result<Self, Error> {
        Ok(SeparatorSpec::Pattern(Regex::new(pattern)?))
    }

    /// Source text of the separator
    pub fn as_str(&self) -> &str {
        match self {
            SeparatorSpec::Literal(literal) => literal,
            SeparatorSpec::Pattern(regex) => regex.as_str(),
        }
    }

    /// Whether this separator is a regular expression
    pub fn is_pattern(&self) -> bool {
        matches!(self, SeparatorSpec::Pattern(_))
    }
}

impl Default for SeparatorSpec {
    fn default() -> Self {
        SeparatorSpec::Literal(" ".to_string())
    }
}

impl fmt::Display for SeparatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorSpec::Literal(literal) => write!(f, "{literal:?}"),
            SeparatorSpec::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<Regex> for SeparatorSpec {
    fn from(regex: Regex) -> Self {
        SeparatorSpec::Pattern(regex)
    }
}

impl From<&str> for SeparatorSpec {
    fn from(literal: &str) -> Self {
        SeparatorSpec::literal(literal)
    }
}

impl From<char> for SeparatorSpec {
    fn from(ch: char) -> Self {
        SeparatorSpec::Literal(ch.to_string())
    }
}

impl Separator for SeparatorSpec {
    fn split_segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            SeparatorSpec::Literal(literal) => literal.split_segments(text),
            SeparatorSpec::Pattern(regex) => regex.split_segments(text),
        }
    }
}
