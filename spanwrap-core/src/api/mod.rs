//! Public API for text segmentation
//!
//! Wraps the domain algorithm behind a validated configuration and a
//! segmenter that works on containers, plain text and other inputs.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, SegmentStats};
pub use processor::TextSegmenter;
