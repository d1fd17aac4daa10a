//! URL existence check

use crate::error::CliError;
use anyhow::Result;
use std::time::Duration;

/// Request timeout for the existence check
pub const TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("spanwrap/", env!("CARGO_PKG_VERSION"));

/// Whether `url` points at something other than a 404.
///
/// Performs a single GET. Any status except 404 counts as existing;
/// failures before a status arrives (DNS, TLS, refused connection, malformed
/// URL) are returned as errors.
pub fn url_exists(url: &str) -> Result<bool> {
    let agent = ureq::AgentBuilder::new()
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
        .build();

    let status = match agent.get(url).call() {
        Ok(response) => response.status(),
        Err(ureq::Error::Status(code, _)) => code,
        Err(ureq::Error::Transport(transport)) => {
            return Err(CliError::UrlCheckError(format!("{url}: {transport}")).into());
        }
    };
    log::info!("{url} answered with status {status}");

    Ok(exists_for_status(status))
}

/// Existence verdict for an HTTP status
pub fn exists_for_status(status: u16) -> bool {
    status != 404
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_404_means_missing() {
        assert!(exists_for_status(200));
        assert!(exists_for_status(301));
        assert!(exists_for_status(403));
        assert!(exists_for_status(500));
        assert!(!exists_for_status(404));
    }

    #[test]
    fn test_malformed_url_is_an_error() {
        let err = url_exists("not a url").unwrap_err();
        assert!(err.to_string().starts_with("URL check failed"));
    }

    #[test]
    fn test_unsupported_scheme_is_an_error() {
        assert!(url_exists("ftp://example.com/file").is_err());
    }
}
