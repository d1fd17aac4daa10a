//! Check-url command implementation

use crate::url_check::url_exists;
use anyhow::Result;
use clap::Args;

/// Arguments for the check-url command
#[derive(Debug, Args)]
pub struct CheckUrlArgs {
    /// URL to request
    #[arg(value_name = "URL")]
    pub url: String,
}

impl CheckUrlArgs {
    /// Execute the check-url command
    pub fn execute(&self) -> Result<()> {
        if url_exists(&self.url)? {
            println!("✓ {} exists", self.url);
            Ok(())
        } else {
            println!("✗ {} was not found", self.url);
            anyhow::bail!("{} answered 404", self.url)
        }
    }
}
