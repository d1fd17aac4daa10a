//! Split marked-up text into segments and wrap each one in an inline element
//!
//! The segmenter reads the raw markup of a container, splits it on forced
//! line-break markers (`<br>`) and then on a caller-supplied separator, wraps
//! every non-empty, non-space segment in an inline tag (`<span>` by default)
//! and writes the result back. The wrapper elements are returned in document
//! order so callers can attach per-word behavior to them.
//!
//! # Architecture
//!
//! - **Domain layer**: separators, tokenization and the wrapping rule
//! - **Markup layer**: containers, the element model and a forgiving scanner
//!   used to query elements back out of markup
//! - **API layer**: validated configuration and the `TextSegmenter`
//! - **Helpers**: cookie, form-validation and numeric utilities
//!
//! # Example
//!
//! ```rust
//! use spanwrap_core::{MarkupContainer, TextSegmenter};
//!
//! let segmenter = TextSegmenter::new();
//! let mut content = String::from("hello world<br>foo");
//!
//! let wrappers = segmenter.segment(&mut content);
//!
//! assert_eq!(content, "<span>hello</span> <span>world</span> <br><span>foo</span> ");
//! assert_eq!(wrappers.len(), 3);
//! assert_eq!(wrappers[0].inner_html(), "hello");
//! ```

pub mod api;
pub mod domain;
pub mod helpers;
pub mod markup;

pub use api::{
    Config, ConfigBuilder, Error, Input, Output, ProcessingMetadata, Result, SegmentStats,
    TextSegmenter,
};
pub use domain::{tokenize, Separator, SeparatorSpec, Token, LINE_BREAK_MARKER};
pub use markup::{query_selector, query_selector_all, Element, MarkupContainer, Selector};
