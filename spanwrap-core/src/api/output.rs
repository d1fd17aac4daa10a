//! Output types for the segmenter

use crate::markup::Element;
use serde::Serialize;
use std::time::Duration;

/// Result of segmenting one piece of markup
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Markup with every qualifying segment wrapped
    pub html: String,
    /// Wrapper elements found in `html`, in document order
    pub wrappers: Vec<Element>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Separator as configured (literal in quotes, regex in slashes)
    pub separator: String,
    /// Wrapper tag name
    pub tag: String,
    /// Token counts
    pub stats: SegmentStats,
}

/// Token statistics of one segmentation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentStats {
    /// Bytes of input markup
    pub bytes_processed: usize,
    /// Characters of input markup
    pub chars_processed: usize,
    /// Line-break markers written back
    pub line_breaks: usize,
    /// Segments produced by the separator
    pub segments: usize,
    /// Segments wrapped in the tag
    pub wrapped: usize,
    /// Empty and single-space segments written back unchanged
    pub passed_through: usize,
}

impl Output {
    /// Text content of every wrapper, in order
    pub fn wrapper_texts(&self) -> Vec<String> {
        self.wrappers.iter().map(Element::text_content).collect()
    }

    /// Number of wrapper elements
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}
