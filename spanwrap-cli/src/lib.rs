//! Spanwrap CLI library
//!
//! This library provides the command-line interface for wrapping the words
//! of HTML fragments in inline elements.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod url_check;

pub use error::{CliError, CliResult};
