//! Validation and matching errors for the allowlist.

use thiserror::Error;

/// Error raised while validating allowlist entries or parsing a candidate
/// URL.
///
/// Validation variants identify the offending entry by its index so a
/// malformed config halts startup pointing at the bad entry.
#[derive(Debug, Error)]
pub enum AllowlistError {
    #[error("entry {index}: hostname must not be empty")]
    EmptyHostname { index: usize },

    #[error("entry {index}: invalid host pattern {hostname:?}")]
    InvalidHostPattern { index: usize, hostname: String },

    #[error("entry {index}: port {port:?} is not a valid port number")]
    InvalidPort { index: usize, port: String },

    #[error("entry {index}: pathname {pathname:?} must be a `/`-rooted glob")]
    InvalidPathname { index: usize, pathname: String },

    #[error("invalid candidate URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
