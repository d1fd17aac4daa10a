//! Tokenization of marked-up text into line breaks and segments

use super::separator::Separator;

/// The line-break marker recognized in content by default
pub const LINE_BREAK_MARKER: &str = "<br>";

/// A token of marked-up text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// A line-break marker, kept atomic
    LineBreak,
    /// A segment produced by the separator
    Segment(&'t str),
}

impl<'t> Token<'t> {
    /// Segment text, if this token is a segment
    pub fn as_segment(&self) -> Option<&'t str> {
        match *self {
            Token::Segment(segment) => Some(segment),
            Token::LineBreak => None,
        }
    }
}

/// Split `text` on `marker` first, then split every chunk between markers
/// with `separator`.
///
/// Markers never reach the separator, so a separator that could match part
/// of the marker text does not interact with it. An empty marker disables
/// marker detection.
pub fn tokenize<'t, S>(text: &'t str, marker: &str, separator: &S) -> Vec<Token<'t>>
where
    S: Separator + ?Sized,
{
    if marker.is_empty() {
        return separator
            .split_segments(text)
            .into_iter()
            .map(Token::Segment)
            .collect();
    }

    let mut tokens = Vec::new();
    for (index, chunk) in text.split(marker).enumerate() {
        if index > 0 {
            tokens.push(Token::LineBreak);
        }
        tokens.extend(
            separator
                .split_segments(chunk)
                .into_iter()
                .map(Token::Segment),
        );
    }
    tokens
}
