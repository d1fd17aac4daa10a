//! Segmentation algorithm: markers, separators and the wrapping rule

pub mod separator;
pub mod token;
pub mod wrap;

pub use separator::{Separator, SeparatorSpec};
pub use token::{tokenize, Token, LINE_BREAK_MARKER};
pub use wrap::{wrap_segment, Disposition, WrapRule};
