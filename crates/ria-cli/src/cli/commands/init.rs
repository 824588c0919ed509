//! `ria init` – create the default config file.

use anyhow::Result;
use ria_core::config;

pub fn run_init() -> Result<()> {
    config::load_or_init()?;
    println!("config at {}", config::config_path()?.display());
    Ok(())
}
