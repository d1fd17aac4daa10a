//! Wrapping rule applied to each token

use super::token::Token;

/// What happened to a token when it was rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Written back as a line-break marker
    LineBreak,
    /// Written back unchanged (empty, single space)
    PassedThrough,
    /// Wrapped in the inline tag
    Wrapped,
}

/// Renders tokens into markup, wrapping qualifying segments in `tag`.
#[derive(Debug, Clone, Copy)]
pub struct WrapRule<'a> {
    tag: &'a str,
    marker: &'a str,
}

impl<'a> WrapRule<'a> {
    /// Create a rule wrapping segments in `<tag>` and emitting `marker` for
    /// line breaks
    pub fn new(tag: &'a str, marker: &'a str) -> Self {
        Self { tag, marker }
    }

    /// Append the rendering of `token` to `out`.
    ///
    /// Segments longer than one UTF-16 code unit get a trailing space after
    /// the closing tag; single-unit segments do not. Characters outside the
    /// Basic Multilingual Plane count as two units.
    pub fn apply(&self, token: Token<'_>, out: &mut String) -> Disposition {
        let segment = match token {
            Token::LineBreak => {
                out.push_str(self.marker);
                return Disposition::LineBreak;
            }
            Token::Segment(segment) => segment,
        };

        if segment.is_empty() || segment == " " {
            out.push_str(segment);
            return Disposition::PassedThrough;
        }
        if segment == self.marker {
            out.push_str(self.marker);
            return Disposition::LineBreak;
        }

        wrap_segment(segment, self.tag, out);
        if segment.encode_utf16().nth(1).is_some() {
            out.push(' ');
        }
        Disposition::Wrapped
    }
}

/// Append `<tag>segment</tag>` to `out`
pub fn wrap_segment(segment: &str, tag: &str, out: &mut String) {
    out.reserve(segment.len() + 2 * tag.len() + 5);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(segment);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
