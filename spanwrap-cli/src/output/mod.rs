//! Output formatting module

use anyhow::Result;
use spanwrap_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the segmentation of one source document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
