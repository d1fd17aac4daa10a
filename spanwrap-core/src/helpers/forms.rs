//! Form field validation

use crate::api::Error;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// MIME types accepted as documents
pub const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/doc",
    "application/docx",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

/// MIME types accepted as images
pub const IMAGE_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/webp",
    "image/bmp",
];

/// Bytes per megabyte for size limits (decimal)
const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

static EMAIL: OnceLock<Regex> = OnceLock::new();

/// Accepted file categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Documents,
    Images,
}

impl FileCategory {
    /// MIME types of the category
    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            FileCategory::Documents => DOCUMENT_TYPES,
            FileCategory::Images => IMAGE_TYPES,
        }
    }
}

impl FromStr for FileCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documents" => Ok(FileCategory::Documents),
            "images" => Ok(FileCategory::Images),
            other => Err(Error::Configuration(format!(
                "unknown file category: {other}"
            ))),
        }
    }
}

/// Whether `mime` belongs to `category` (exact, case-sensitive match)
pub fn valid_file_type(mime: &str, category: FileCategory) -> bool {
    category.mime_types().contains(&mime)
}

/// Whether `size_bytes` stays within `limit_mb` megabytes
pub fn valid_file_size(size_bytes: u64, limit_mb: f64) -> bool {
    limit_mb >= size_bytes as f64 / BYTES_PER_MEGABYTE
}

/// Whether `email` is syntactically an address
pub fn valid_email(email: &str) -> bool {
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
                .expect("email pattern is valid")
        })
        .is_match(email)
}
