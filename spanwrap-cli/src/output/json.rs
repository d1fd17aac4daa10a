//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use spanwrap_core::{Output, SegmentStats};
use std::io::Write;

/// JSON formatter - outputs one record per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source file of the document
    pub source: String,
    /// Markup with segments wrapped
    pub html: String,
    /// Text content of each wrapper, in document order
    pub segments: Vec<String>,
    /// Line breaks in the document
    pub line_breaks: usize,
    /// Segments written back unchanged
    pub passed_through: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        let SegmentStats {
            line_breaks,
            passed_through,
            ..
        } = output.metadata.stats;

        self.documents.push(DocumentData {
            source: source.to_string(),
            html: output.html.clone(),
            segments: output.wrapper_texts(),
            line_breaks,
            passed_through,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwrap_core::TextSegmenter;

    #[test]
    fn test_json_records() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        let output = TextSegmenter::new().segment_text("hello world<br>foo");
        formatter.format_document("intro.html", &output).unwrap();
        formatter.finish().unwrap();

        let records: Vec<DocumentData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "intro.html");
        assert_eq!(records[0].segments, vec!["hello", "world", "foo"]);
        assert_eq!(records[0].line_breaks, 1);
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
