//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use spanwrap_core::Output;
use std::io::{self, Write};

/// Plain text formatter - outputs the wrapped markup of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.html)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwrap_core::TextSegmenter;

    #[test]
    fn test_writes_markup_per_document() {
        let segmenter = TextSegmenter::new();
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_document("a.html", &segmenter.segment_text("hi"))
            .unwrap();
        formatter
            .format_document("b.html", &segmenter.segment_text("yo<br>x"))
            .unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            written,
            "<span>hi</span> \n<span>yo</span> <br><span>x</span>\n"
        );
    }
}
