//! Markup containers, elements and element queries

pub mod container;
pub mod element;
pub mod scanner;
pub mod selector;

pub use container::MarkupContainer;
pub use element::{is_void, set_attribute_to_children, set_class_name_to_children, Element};
pub use scanner::{decode_entities, parse_fragment, text_content};
pub use selector::{query_selector, query_selector_all, Selector};
