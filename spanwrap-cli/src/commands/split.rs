//! Split command implementation

use crate::config::{build_config, CliConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use spanwrap_core::{Config, TextSegmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator splitting text into segments
    #[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Treat the separator as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Tag wrapped around each segment
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Line-break marker kept between segments
    #[arg(long, value_name = "MARKER")]
    pub marker: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Wrapped markup, one document per line
    Text,
    /// JSON array with one record per document
    Json,
    /// Markdown list of segments per document
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("Unknown output format in config: {other}"),
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting segmentation");

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let segmenter = TextSegmenter::with_config(self.segmenter_config(&file_config)?);
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.default_format)?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        for path in &files {
            let source = path.display().to_string();
            log::info!(
                "Processing {} ({} bytes)",
                source,
                FileReader::file_size(path)?
            );

            let text = FileReader::read_text(path)?;
            let output = segmenter.segment_text(&text);
            log::debug!(
                "{}: {} segments wrapped in {:?}",
                source,
                output.metadata.stats.wrapped,
                output.metadata.duration
            );

            formatter.format_document(&source, &output)?;
            progress.file_completed(&source);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    /// Merge command-line overrides over the configuration file
    fn segmenter_config(&self, file_config: &CliConfig) -> Result<Config> {
        let mut builder = file_config.segmenter_builder();
        match &self.separator {
            // A separator given here is literal unless --regex is passed too
            Some(separator) => {
                builder = builder.separator(separator.as_str()).regex(self.regex);
            }
            None if self.regex => builder = builder.regex(true),
            None => {}
        }
        if let Some(tag) = &self.tag {
            builder = builder.tag(tag.as_str());
        }
        if let Some(marker) = &self.marker {
            builder = builder.line_break_marker(marker.as_str());
        }

        build_config(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SplitArgs {
        SplitArgs {
            input: vec!["page.html".to_string()],
            output: None,
            format: None,
            separator: None,
            regex: false,
            tag: None,
            marker: None,
            config: None,
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let config = args().segmenter_config(&CliConfig::default()).unwrap();
        assert_eq!(config.separator().as_str(), " ");
        assert_eq!(config.tag(), "span");
        assert_eq!(config.line_break_marker(), "<br>");
    }

    #[test]
    fn test_arguments_override_config() {
        let mut file_config = CliConfig::default();
        file_config.segmenter.separator = r"\s+".to_string();
        file_config.segmenter.regex = true;
        file_config.segmenter.tag = "em".to_string();

        let mut split = args();
        split.separator = Some(",".to_string());
        split.tag = Some("b".to_string());

        let config = split.segmenter_config(&file_config).unwrap();
        assert_eq!(config.separator().as_str(), ",");
        assert!(!config.separator().is_pattern());
        assert_eq!(config.tag(), "b");
    }

    #[test]
    fn test_regex_flag_applies_to_config_separator() {
        let mut file_config = CliConfig::default();
        file_config.segmenter.separator = "[,;]".to_string();

        let mut split = args();
        split.regex = true;
        split.marker = Some("<hr>".to_string());

        let config = split.segmenter_config(&file_config).unwrap();
        assert!(config.separator().is_pattern());
        assert_eq!(config.separator().as_str(), "[,;]");
        assert_eq!(config.line_break_marker(), "<hr>");
    }

    #[test]
    fn test_unset_arguments_match_config_file() {
        let mut file_config = CliConfig::default();
        file_config.segmenter.separator = r"\s+".to_string();
        file_config.segmenter.regex = true;
        file_config.segmenter.tag = "em".to_string();

        let merged = args().segmenter_config(&file_config).unwrap();
        let direct = file_config.segmenter_config().unwrap();
        assert_eq!(merged.separator().as_str(), direct.separator().as_str());
        assert_eq!(merged.separator().is_pattern(), direct.separator().is_pattern());
        assert_eq!(merged.tag(), direct.tag());
        assert_eq!(merged.line_break_marker(), direct.line_break_marker());
    }

    #[test]
    fn test_regex_flag_compiles_pattern() {
        let mut split = args();
        split.separator = Some("[,;]".to_string());
        split.regex = true;

        let config = split.segmenter_config(&CliConfig::default()).unwrap();
        assert!(config.separator().is_pattern());

        split.separator = Some("(".to_string());
        assert!(split.segmenter_config(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_name("yaml").is_err());
    }
}
