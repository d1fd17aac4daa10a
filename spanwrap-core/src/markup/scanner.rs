//! Forgiving markup scanner
//!
//! Recovers elements from a markup fragment without building a tree:
//!
//! - start tags open an element, the nearest matching end tag closes it
//!   (closing any element opened after it);
//! - void and self-closing elements have no content;
//! - stray end tags are ignored, unclosed elements run to the end of input;
//! - `script`, `style`, `textarea` and `title` content is not scanned for
//!   tags;
//! - comments, doctypes and processing instructions are skipped.
//!
//! A `<` that does not start a tag is plain text.

use super::element::{is_void, Element};
use std::borrow::Cow;

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// A tag found by the scanner
#[derive(Debug, PartialEq, Eq)]
enum Tag {
    Start {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    End {
        name: String,
    },
    /// Comment, doctype or processing instruction
    Other,
}

struct OpenElement {
    order: usize,
    name: String,
    attributes: Vec<(String, String)>,
    content_start: usize,
}

/// All elements of `markup` in document order
pub fn parse_fragment(markup: &str) -> Vec<Element> {
    let mut finished: Vec<(usize, Element)> = Vec::new();
    let mut open: Vec<OpenElement> = Vec::new();
    let mut order = 0;
    let mut pos = 0;

    while let Some(found) = markup[pos..].find('<') {
        let tag_start = pos + found;
        let Some((tag, tag_end)) = scan_tag(markup, tag_start) else {
            pos = tag_start + 1;
            continue;
        };
        pos = tag_end;

        match tag {
            Tag::Start {
                name,
                attributes,
                self_closing,
            } => {
                let index = order;
                order += 1;

                if self_closing || is_void(&name) {
                    finished.push((index, Element::from_parts(name, attributes, String::new())));
                    continue;
                }

                if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    let (content_end, close_end) = find_raw_text_end(markup, tag_end, &name);
                    let inner = markup[tag_end..content_end].to_string();
                    finished.push((index, Element::from_parts(name, attributes, inner)));
                    pos = close_end;
                    continue;
                }

                open.push(OpenElement {
                    order: index,
                    name,
                    attributes,
                    content_start: tag_end,
                });
            }
            Tag::End { name } => {
                let Some(depth) = open.iter().rposition(|element| element.name == name) else {
                    continue;
                };
                for element in open.drain(depth..) {
                    let inner = markup[element.content_start..tag_start].to_string();
                    finished.push((
                        element.order,
                        Element::from_parts(element.name, element.attributes, inner),
                    ));
                }
            }
            Tag::Other => {}
        }
    }

    for element in open {
        let inner = markup[element.content_start..].to_string();
        finished.push((
            element.order,
            Element::from_parts(element.name, element.attributes, inner),
        ));
    }

    finished.sort_by_key(|(order, _)| *order);
    finished.into_iter().map(|(_, element)| element).collect()
}

/// Text of a markup fragment with tags removed and entities decoded
pub fn text_content(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut pos = 0;

    while let Some(found) = markup[pos..].find('<') {
        let tag_start = pos + found;
        text.push_str(&markup[pos..tag_start]);
        match scan_tag(markup, tag_start) {
            Some((_, tag_end)) => pos = tag_end,
            None => {
                text.push('<');
                pos = tag_start + 1;
            }
        }
    }
    text.push_str(&markup[pos..]);

    decode_entities(&text).into_owned()
}

/// Decode the common named entities and numeric character references
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let entity = rest[1..]
            .find(';')
            .filter(|end| *end <= 10)
            .map(|end| &rest[1..1 + end]);
        match entity.and_then(decode_entity) {
            Some(ch) => {
                decoded.push(ch);
                // '&' + name + ';'
                rest = &rest[entity.map_or(0, str::len) + 2..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Escape an attribute value for a double-quoted attribute
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Scan a tag starting at `start` (which holds `<`). Returns the tag and the
/// offset just past it, or `None` when the `<` is plain text.
fn scan_tag(markup: &str, start: usize) -> Option<(Tag, usize)> {
    let rest = &markup[start + 1..];

    if let Some(comment) = rest.strip_prefix("!--") {
        let end = comment
            .find("-->")
            .map_or(markup.len(), |offset| start + 4 + offset + 3);
        return Some((Tag::Other, end));
    }
    if rest.starts_with(['!', '?']) {
        let end = rest.find('>').map_or(markup.len(), |offset| start + 2 + offset);
        return Some((Tag::Other, end));
    }

    if let Some(after_slash) = rest.strip_prefix('/') {
        let name_len = tag_name_len(after_slash);
        if name_len == 0 {
            return None;
        }
        let name = after_slash[..name_len].to_ascii_lowercase();
        let end = after_slash
            .find('>')
            .map_or(markup.len(), |offset| start + 3 + offset);
        return Some((Tag::End { name }, end));
    }

    let name_len = tag_name_len(rest);
    if name_len == 0 {
        return None;
    }
    let name = rest[..name_len].to_ascii_lowercase();
    let (attributes, self_closing, consumed) = scan_attributes(&rest[name_len..]);
    Some((
        Tag::Start {
            name,
            attributes,
            self_closing,
        },
        start + 1 + name_len + consumed,
    ))
}

fn tag_name_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, ch)) if ch.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == ':'))
        .map_or(text.len(), |(offset, _)| offset)
}

/// Parse attributes up to and including the closing `>`.
/// Returns the attributes, whether the tag was self-closing and the number
/// of bytes consumed.
fn scan_attributes(text: &str) -> (Vec<(String, String)>, bool, usize) {
    let bytes = text.as_bytes();
    let mut attributes: Vec<(String, String)> = Vec::new();
    let mut i = 0;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            return (attributes, false, i);
        }
        match bytes[i] {
            b'>' => return (attributes, false, i + 1),
            b'/' if bytes.get(i + 1) == Some(&b'>') => return (attributes, true, i + 2),
            b'/' => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let name = text[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = String::new();
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    let value_start = i + 1;
                    let value_end = text[value_start..]
                        .find(quote as char)
                        .map_or(text.len(), |offset| value_start + offset);
                    value = decode_entities(&text[value_start..value_end]).into_owned();
                    i = (value_end + 1).min(text.len());
                }
                _ => {
                    let value_start = i;
                    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = decode_entities(&text[value_start..i]).into_owned();
                }
            }
        }

        if !name.is_empty() && !attributes.iter().any(|(existing, _)| *existing == name) {
            attributes.push((name, value));
        }
    }
}

/// Locate the end tag of a raw text element. Returns the content end and
/// the offset past the end tag.
fn find_raw_text_end(markup: &str, content_start: usize, name: &str) -> (usize, usize) {
    let closing = format!("</{name}");
    let lowered = markup[content_start..].to_ascii_lowercase();
    match lowered.find(&closing) {
        Some(offset) => {
            let content_end = content_start + offset;
            let close_end = markup[content_end..]
                .find('>')
                .map_or(markup.len(), |gt| content_end + gt + 1);
            (content_end, close_end)
        }
        None => (markup.len(), markup.len()),
    }
}
