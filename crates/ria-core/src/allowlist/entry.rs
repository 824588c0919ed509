//! Remote pattern entry and protocol types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL scheme a pattern permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// Default port for the protocol, used when a pattern's `port` is empty.
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_pathname() -> String {
    "/**".to_string()
}

/// One permitted remote image source: protocol, host pattern, optional port,
/// and path glob.
///
/// Hostname wildcards: `*` matches exactly one DNS label, `**` matches a run
/// of labels (`**.example.com` covers every subdomain but not the apex
/// domain, which needs its own entry). Pathname globs: `*` stays within one
/// `/` segment, `**` crosses segments; the default `/**` permits any path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    pub protocol: Protocol,
    pub hostname: String,
    /// Explicit port as text; empty means the protocol's default port.
    #[serde(default)]
    pub port: String,
    #[serde(default = "default_pathname")]
    pub pathname: String,
}

impl fmt::Display for RemotePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.protocol, self.hostname)?;
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(&self.pathname)
    }
}
