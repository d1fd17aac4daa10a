//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::template()?;

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the separator, tag and marker to taste");
        println!("2. Validate your configuration:");
        println!("   spanwrap validate --config {}", path.display());
        println!("3. Use it for splitting:");
        println!("   spanwrap split -i page.html --config {}", path.display());

        Ok(())
    }

    /// Default configuration rendered as TOML with a header comment
    fn template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# spanwrap configuration\n\
             # separator is literal text unless regex = true\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let template = GenerateConfigArgs::template().unwrap();
        assert!(template.starts_with("# spanwrap configuration"));
        assert_eq!(CliConfig::from_toml(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spanwrap.toml");
        let args = GenerateConfigArgs {
            output: Some(path.clone()),
        };
        args.execute().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[segmenter]"));
        assert!(written.contains("tag = \"span\""));
    }
}
