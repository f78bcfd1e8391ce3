//! Document link validation.
//!
//! The `validator` crate only checks that a link parses as an absolute URL.
//! Registered links must additionally use a web or file-transfer scheme and
//! name a host.

use url::Url;

/// Schemes accepted for document links.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Errors that can occur while validating a document link.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute http(s)/ftp(s) URL with a host.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_link("https://www.example.com").is_ok());
/// assert!(validate_link("invalid_link").is_err());
/// assert!(validate_link("javascript:alert(1)").is_err());
/// ```
pub fn validate_link(input: &str) -> Result<(), LinkError> {
    let url = Url::parse(input.trim()).map_err(|e| LinkError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(LinkError::UnsupportedScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(LinkError::MissingHost),
    }
}
