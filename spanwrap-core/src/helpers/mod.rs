//! Standalone helpers for browser-facing code: cookies, form validation and
//! numeric interpolation

pub mod cookie;
pub mod forms;
pub mod math;

pub use cookie::{delete_cookie, get_cookie};
pub use forms::{valid_email, valid_file_size, valid_file_type, FileCategory};
pub use math::{clamp, lerp};
