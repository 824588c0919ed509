//! `ria check` – load and validate the allowlist config.

use anyhow::Result;
use std::path::Path;

use super::load_config;

pub fn run_check(config: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;
    tracing::debug!("config valid with {} entries", cfg.remote_patterns.len());
    println!("ok: {} remote pattern(s)", cfg.remote_patterns.len());
    Ok(())
}
