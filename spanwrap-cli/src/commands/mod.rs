//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod check_url;
pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wrap the segments of HTML fragments in inline elements
    Split(split::SplitArgs),

    /// Check whether a URL answers with anything but 404
    CheckUrl(check_url::CheckUrlArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration file with default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(quiet),
            Commands::CheckUrl(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let split_cmd = Commands::Split(split::SplitArgs {
            input: vec!["page.html".to_string()],
            output: None,
            format: Some(split::OutputFormat::Json),
            separator: Some(",".to_string()),
            regex: false,
            tag: None,
            marker: None,
            config: None,
        });
        let debug_str = format!("{:?}", split_cmd);
        assert!(debug_str.contains("Split"));
        assert!(debug_str.contains("page.html"));

        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("spanwrap.toml"),
        });
        assert!(format!("{:?}", validate_cmd).contains("spanwrap.toml"));
    }
}
