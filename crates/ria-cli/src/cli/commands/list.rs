//! `ria list` – print configured remote patterns.

use anyhow::Result;
use std::path::Path;

use super::load_config;

pub fn run_list(config: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;
    if cfg.remote_patterns.is_empty() {
        println!("No remote patterns configured (all remote images denied).");
        return Ok(());
    }
    println!(
        "{:<4} {:<9} {:<42} {:<6} {}",
        "#", "PROTOCOL", "HOSTNAME", "PORT", "PATHNAME"
    );
    for (i, p) in cfg.remote_patterns.iter().enumerate() {
        let port = if p.port.is_empty() { "-" } else { p.port.as_str() };
        println!(
            "{:<4} {:<9} {:<42} {:<6} {}",
            i, p.protocol, p.hostname, port, p.pathname
        );
    }
    Ok(())
}
