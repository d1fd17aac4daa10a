//! Text segmenter

use std::io::Read;
use std::time::Instant;

use crate::api::output::{ProcessingMetadata, SegmentStats};
use crate::api::{Config, Error, Input, Output};
use crate::domain::{tokenize, Disposition, SeparatorSpec, WrapRule};
use crate::markup::{query_selector_all, Element, MarkupContainer, Selector};

/// Splits markup into segments and wraps each qualifying segment in an
/// inline element.
///
/// The segmenter holds no state between calls; every call reads its
/// container, rewrites it and queries the result afresh. Running it twice
/// over the same container nests the wrappers.
#[derive(Debug, Clone)]
pub struct TextSegmenter {
    config: Config,
    selector: Selector,
}

impl TextSegmenter {
    /// Create a segmenter with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a segmenter with a validated configuration
    pub fn with_config(config: Config) -> Self {
        let selector = Selector::Tag(config.tag.clone());
        Self { config, selector }
    }

    /// Create a segmenter splitting on `separator`
    pub fn with_separator(separator: impl Into<SeparatorSpec>) -> Self {
        Self::with_config(Config::with_separator(separator))
    }

    /// Create a segmenter splitting on a regular expression
    pub fn with_pattern(pattern: &str) -> Result<Self, Error> {
        let config = Config::builder().pattern(pattern).build()?;
        Ok(Self::with_config(config))
    }

    /// Segment the content of `container` in place and return the wrapper
    /// elements now present in it, in document order
    pub fn segment<C>(&self, container: &mut C) -> Vec<Element>
    where
        C: MarkupContainer + ?Sized,
    {
        let (html, stats) = self.render(container.inner_html());
        log::debug!(
            "segmented container: {} segments, {} wrapped, {} line breaks",
            stats.segments,
            stats.wrapped,
            stats.line_breaks
        );
        container.set_inner_html(html);
        query_selector_all(container.inner_html(), &self.selector)
    }

    /// Segment `text` without a container
    pub fn segment_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let (html, stats) = self.render(text);
        let wrappers = query_selector_all(&html, &self.selector);

        Output {
            html,
            wrappers,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                separator: self.config.separator.to_string(),
                tag: self.config.tag.clone(),
                stats,
            },
        }
    }

    /// Process input and return the segmented markup
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text()?;
        Ok(self.segment_text(&text))
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn render(&self, text: &str) -> (String, SegmentStats) {
        let marker = self.config.line_break_marker.as_str();
        let rule = WrapRule::new(&self.config.tag, marker);
        let tokens = tokenize(text, marker, &self.config.separator);
        log::trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());

        let mut stats = SegmentStats {
            bytes_processed: text.len(),
            chars_processed: text.chars().count(),
            ..SegmentStats::default()
        };
        let mut html = String::with_capacity(text.len() * 2);

        for token in tokens {
            if token.as_segment().is_some() {
                stats.segments += 1;
            }
            match rule.apply(token, &mut html) {
                Disposition::LineBreak => stats.line_breaks += 1,
                Disposition::PassedThrough => stats.passed_through += 1,
                Disposition::Wrapped => stats.wrapped += 1,
            }
        }

        (html, stats)
    }
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
