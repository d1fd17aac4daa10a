//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use spanwrap_core::Output;
use std::io::Write;

/// Markdown formatter - lists the segments of each document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (index, text) in output.wrapper_texts().iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, text)?;
        }
        writeln!(self.writer)?;
        self.segment_count += output.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
