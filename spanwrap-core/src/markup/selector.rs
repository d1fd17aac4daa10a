//! Simple selectors for querying elements out of markup

use super::element::Element;
use super::scanner::parse_fragment;
use crate::api::Error;
use std::fmt;
use std::str::FromStr;

/// A single simple selector: `tag`, `.class` or `#id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Selector {
    /// Parse a selector string
    pub fn parse(selector: &str) -> Result<Self, Error> {
        let selector = selector.trim();
        let parsed = if let Some(class) = selector.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if let Some(id) = selector.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else {
            Selector::Tag(selector.to_ascii_lowercase())
        };

        let name = parsed.name();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_' || ch == ':');
        if !valid {
            return Err(Error::InvalidSelector(selector.to_string()));
        }
        Ok(parsed)
    }

    /// Tag name, class or id without its prefix
    pub fn name(&self) -> &str {
        match self {
            Selector::Tag(name) | Selector::Class(name) | Selector::Id(name) => name,
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Tag(name) => element.name() == name,
            Selector::Class(class) => element.has_class(class),
            Selector::Id(id) => element.id() == Some(id.as_str()),
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(name) => write!(f, "{name}"),
            Selector::Class(class) => write!(f, ".{class}"),
            Selector::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// Every element of `markup` matching `selector`, in document order
pub fn query_selector_all(markup: &str, selector: &Selector) -> Vec<Element> {
    parse_fragment(markup)
        .into_iter()
        .filter(|element| selector.matches(element))
        .collect()
}

/// First element of `markup` matching `selector`
pub fn query_selector(markup: &str, selector: &Selector) -> Option<Element> {
    parse_fragment(markup)
        .into_iter()
        .find(|element| selector.matches(element))
}
