//! Cookie string helpers
//!
//! Both functions take the raw cookie header (`name=value; other=value`),
//! as exposed by a document or sent in a `Cookie` request header.

use crate::api::Error;
use percent_encoding::percent_decode_str;
use regex::Regex;

/// Expiry date written when deleting a cookie
pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:01 GMT";

/// Value of cookie `name`, percent-decoded.
///
/// Returns `Ok(None)` when the cookie is absent.
pub fn get_cookie(cookie_header: &str, name: &str) -> Result<Option<String>, Error> {
    let pattern = Regex::new(&format!("(?:^|; ){}=([^;]*)", regex::escape(name)))?;
    let Some(raw) = pattern
        .captures(cookie_header)
        .and_then(|captures| captures.get(1))
    else {
        return Ok(None);
    };

    if let Some(offset) = malformed_escape(raw.as_str()) {
        return Err(Error::Cookie(format!(
            "{name}: malformed escape at byte {offset}"
        )));
    }
    let value = percent_decode_str(raw.as_str())
        .decode_utf8()
        .map_err(|e| Error::Cookie(format!("{name}: {e}")))?;
    Ok(Some(value.into_owned()))
}

/// Byte offset of the first `%` not followed by two hex digits
fn malformed_escape(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        let valid = b != b'%'
            || matches!(bytes.get(i + 1..i + 3), Some([hi, lo])
                if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
        (!valid).then_some(i)
    })
}

/// Cookie assignment that expires cookie `name`.
///
/// Returns `Ok(None)` when the cookie is absent or empty, since there is
/// nothing to delete.
pub fn delete_cookie(
    cookie_header: &str,
    name: &str,
    path: Option<&str>,
) -> Result<Option<String>, Error> {
    let present = get_cookie(cookie_header, name)?.is_some_and(|value| !value.is_empty());
    if !present {
        return Ok(None);
    }

    let path = path
        .filter(|path| !path.is_empty())
        .map(|path| format!(";path={path}"))
        .unwrap_or_default();
    Ok(Some(format!("{name}={path};expires={EXPIRED}")))
}
