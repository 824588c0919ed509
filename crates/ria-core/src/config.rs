use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::allowlist::{Allowlist, AllowlistError, RemotePattern};

/// On-disk allowlist configuration, loaded from `~/.config/ria/config.toml`.
///
/// `remote_patterns` is ordered; order has no effect on matching (any entry
/// may match independently) but is preserved for readability and diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistConfig {
    /// Permitted remote image sources. An empty list denies all remote images.
    #[serde(default)]
    pub remote_patterns: Vec<RemotePattern>,
}

impl AllowlistConfig {
    /// Validates the configured patterns and compiles them into a matcher.
    pub fn compile(self) -> Result<Allowlist, AllowlistError> {
        Allowlist::compile(self.remote_patterns)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ria")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating an empty (deny-all) file if none
/// exists.
pub fn load_or_init() -> Result<AllowlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AllowlistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path, validating every entry so a
/// malformed config halts startup pointing at the offending entry's index.
pub fn load_from_path(path: &Path) -> Result<AllowlistConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: AllowlistConfig = toml::from_str(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Allowlist::compile(cfg.remote_patterns.clone())
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::Protocol;
    use std::io::Write;

    #[test]
    fn default_config_denies_all() {
        let cfg = AllowlistConfig::default();
        assert!(cfg.remote_patterns.is_empty());
        let allowlist = cfg.compile().unwrap();
        assert!(!allowlist.permits("https://cdn.example.com/x.png").unwrap());
    }

    #[test]
    fn config_toml_roundtrip() {
        let toml_src = r#"
            [[remote_patterns]]
            protocol = "https"
            hostname = "lh7-rt.googleusercontent.com"
            port = ""
            pathname = "/**"

            [[remote_patterns]]
            protocol = "http"
            hostname = "cdn.internal"
            port = "8080"
            pathname = "/assets/**"
        "#;
        let cfg: AllowlistConfig = toml::from_str(toml_src).unwrap();
        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let reparsed: AllowlistConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed, cfg);
        assert_eq!(reparsed.remote_patterns.len(), 2);
    }

    #[test]
    fn config_toml_defaults_port_and_pathname() {
        let toml_src = r#"
            [[remote_patterns]]
            protocol = "https"
            hostname = "encrypted-tbn1.gstatic.com"
        "#;
        let cfg: AllowlistConfig = toml::from_str(toml_src).unwrap();
        let p = &cfg.remote_patterns[0];
        assert_eq!(p.protocol, Protocol::Https);
        assert_eq!(p.port, "");
        assert_eq!(p.pathname, "/**");
    }

    #[test]
    fn config_toml_rejects_unknown_protocol() {
        let toml_src = r#"
            [[remote_patterns]]
            protocol = "ftp"
            hostname = "cdn.example.com"
        "#;
        assert!(toml::from_str::<AllowlistConfig>(toml_src).is_err());
    }

    #[test]
    fn load_from_path_reads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[remote_patterns]]
            protocol = "https"
            hostname = "hpycprmvcnmfuqsoecvl.supabase.co"
            "#
        )
        .unwrap();
        let cfg = load_from_path(file.path()).unwrap();
        assert_eq!(cfg.remote_patterns.len(), 1);
        assert_eq!(
            cfg.remote_patterns[0].hostname,
            "hpycprmvcnmfuqsoecvl.supabase.co"
        );
    }

    #[test]
    fn load_from_path_fails_on_malformed_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[remote_patterns]]
            protocol = "https"
            hostname = "ok.example.com"

            [[remote_patterns]]
            protocol = "https"
            hostname = ""
            "#
        )
        .unwrap();
        let err = load_from_path(file.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("entry 1"), "unexpected error: {msg}");
    }
}
