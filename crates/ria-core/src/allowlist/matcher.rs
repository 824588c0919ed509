//! Compiled allowlist and candidate-URL matching.

use regex::Regex;
use url::Url;

use super::entry::{Protocol, RemotePattern};
use super::error::AllowlistError;
use super::glob;

/// A single validated pattern with its compiled hostname/pathname matchers.
#[derive(Debug)]
struct CompiledPattern {
    protocol: Protocol,
    host: Regex,
    /// Effective port: the explicit one, or the protocol default.
    port: u16,
    path: Regex,
}

impl CompiledPattern {
    fn matches(&self, candidate: &CandidateUrl) -> bool {
        self.protocol.as_str() == candidate.scheme
            && self.port == candidate.port
            && self.host.is_match(&candidate.host)
            && self.path.is_match(&candidate.path)
    }
}

/// Immutable, ordered allowlist compiled from [`RemotePattern`] entries.
///
/// Built once at startup and read-only thereafter; request handlers can share
/// a reference freely with no synchronization.
#[derive(Debug)]
pub struct Allowlist {
    entries: Vec<RemotePattern>,
    compiled: Vec<CompiledPattern>,
}

impl Allowlist {
    /// Validates and compiles `entries`, failing on the first malformed one.
    pub fn compile(entries: Vec<RemotePattern>) -> Result<Self, AllowlistError> {
        let mut compiled = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            compiled.push(compile_entry(index, entry)?);
        }
        Ok(Self { entries, compiled })
    }

    /// The validated entries, in declaration order.
    pub fn entries(&self) -> &[RemotePattern] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry matching `url`, or `None` when no entry
    /// matches and the caller must reject the fetch. Entries match
    /// independently, so the index only serves diagnostics.
    pub fn match_url(&self, url: &str) -> Result<Option<usize>, AllowlistError> {
        let candidate = CandidateUrl::parse(url)?;
        Ok(self.compiled.iter().position(|p| p.matches(&candidate)))
    }

    /// Whether any entry permits `url`.
    pub fn permits(&self, url: &str) -> Result<bool, AllowlistError> {
        Ok(self.match_url(url)?.is_some())
    }
}

fn compile_entry(index: usize, entry: &RemotePattern) -> Result<CompiledPattern, AllowlistError> {
    if entry.hostname.is_empty() {
        return Err(AllowlistError::EmptyHostname { index });
    }
    // The url crate lowercases candidate hosts; lowercase the pattern to match.
    let host = glob::compile(&entry.hostname.to_ascii_lowercase(), '.').map_err(|_| {
        AllowlistError::InvalidHostPattern {
            index,
            hostname: entry.hostname.clone(),
        }
    })?;

    let port = if entry.port.is_empty() {
        entry.protocol.default_port()
    } else {
        entry
            .port
            .parse::<u16>()
            .map_err(|_| AllowlistError::InvalidPort {
                index,
                port: entry.port.clone(),
            })?
    };

    if !entry.pathname.starts_with('/') {
        return Err(AllowlistError::InvalidPathname {
            index,
            pathname: entry.pathname.clone(),
        });
    }
    let path =
        glob::compile(&entry.pathname, '/').map_err(|_| AllowlistError::InvalidPathname {
            index,
            pathname: entry.pathname.clone(),
        })?;

    Ok(CompiledPattern {
        protocol: entry.protocol,
        host,
        port,
        path,
    })
}

/// Candidate image URL normalised to the parts patterns constrain.
#[derive(Debug)]
struct CandidateUrl {
    scheme: String,
    host: String,
    port: u16,
    path: String,
}

impl CandidateUrl {
    fn parse(url: &str) -> Result<Self, AllowlistError> {
        let parsed = Url::parse(url).map_err(|e| AllowlistError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let host = parsed
            .host_str()
            .ok_or_else(|| AllowlistError::InvalidUrl {
                url: url.to_string(),
                reason: "URL has no host".to_string(),
            })?
            .to_string();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| AllowlistError::InvalidUrl {
                url: url.to_string(),
                reason: "URL has no port and no known default".to_string(),
            })?;

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port,
            path: parsed.path().to_string(),
        })
    }
}
