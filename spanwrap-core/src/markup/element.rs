//! Element model: attributes, class lists and rendering

use super::container::MarkupContainer;
use super::scanner::{escape_attribute, text_content};
use serde::Serialize;

/// Elements that never have children or an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether `name` is a void element
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// An element with ordered attributes and raw inner markup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    inner_html: String,
}

impl Element {
    /// Create an empty element; the name is lowercased
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_lowercase(),
            attributes: Vec::new(),
            inner_html: String::new(),
        }
    }

    /// Create an element with an optional id, classes and extra attributes
    pub fn create(
        name: &str,
        id: Option<&str>,
        classes: &[&str],
        attributes: &[(&str, &str)],
    ) -> Self {
        let mut element = Self::new(name);
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            element.set_attribute("id", id);
        }
        for class in classes {
            element.add_class(class);
        }
        for &(name, value) in attributes {
            element.set_attribute(name, value);
        }
        element
    }

    pub(crate) fn from_parts(
        name: String,
        attributes: Vec<(String, String)>,
        inner_html: String,
    ) -> Self {
        Self {
            name,
            attributes,
            inner_html,
        }
    }

    /// Lowercase tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Value of an attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_ascii_lowercase(), value)),
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self
            .attributes
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index).1)
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Classes from the `class` attribute
    pub fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(&class)
    }

    /// Add a class unless already present
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let mut classes = self.class_list().join(" ");
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self.set_attribute("class", classes);
    }

    /// Remove every occurrence of a class
    pub fn remove_class(&mut self, class: &str) {
        if self.attribute("class").is_none() {
            return;
        }
        let classes = self
            .class_list()
            .into_iter()
            .filter(|existing| *existing != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("class", classes);
    }

    /// Add the class when `on`, remove it otherwise
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Text of the element with tags stripped and entities decoded
    pub fn text_content(&self) -> String {
        text_content(&self.inner_html)
    }

    /// Append the markup of `child` to this element's content
    pub fn append_child(&mut self, child: &Element) {
        self.inner_html.push_str(&child.to_html());
    }

    /// Append the markup of every element in `children`
    pub fn append_children<'a>(&mut self, children: impl IntoIterator<Item = &'a Element>) {
        for child in children {
            self.append_child(child);
        }
    }

    /// Render the element as markup
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.inner_html.len() + 2 * self.name.len() + 5);
        html.push('<');
        html.push_str(&self.name);
        for (key, value) in &self.attributes {
            html.push(' ');
            html.push_str(key);
            html.push_str("=\"");
            html.push_str(&escape_attribute(value));
            html.push('"');
        }
        html.push('>');
        if is_void(&self.name) {
            return html;
        }
        html.push_str(&self.inner_html);
        html.push_str("</");
        html.push_str(&self.name);
        html.push('>');
        html
    }
}

impl MarkupContainer for Element {
    fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

/// Number `elements` through attribute `name`.
///
/// With `Some(offset)` each element gets `index + offset`; with `None` it
/// gets its plain index.
pub fn set_attribute_to_children(elements: &mut [Element], name: &str, offset: Option<i64>) {
    for (index, element) in elements.iter_mut().enumerate() {
        let value = offset.unwrap_or(0) + index as i64;
        element.set_attribute(name, value.to_string());
    }
}

/// Add every class in `classes` to every element
pub fn set_class_name_to_children(elements: &mut [Element], classes: &[&str]) {
    for element in elements.iter_mut() {
        for class in classes {
            element.add_class(class);
        }
    }
}
