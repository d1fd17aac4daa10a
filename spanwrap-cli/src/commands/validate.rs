//! Validate command implementation

use crate::config::CliConfig;
use crate::commands::split::OutputFormat;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Separator: {}", config.segmenter.separator);
                println!("  Regex: {}", config.segmenter.regex);
                println!("  Tag: {}", config.segmenter.tag);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<CliConfig> {
        let config = CliConfig::load(path)?;
        config.segmenter_config()?;
        OutputFormat::from_name(&config.output.default_format)?;
        Ok(config)
    }
}
