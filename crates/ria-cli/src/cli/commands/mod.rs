//! CLI command handlers, one file per subcommand.

mod check;
mod init;
mod list;

pub use check::run_check;
pub use init::run_init;
pub use list::run_list;
pub use test::run_test;

use anyhow::Result;
use ria_core::config::{self, AllowlistConfig};
use std::path::Path;

/// Load the config from an explicit path, or from the default location
/// (creating it when missing).
fn load_config(path: Option<&Path>) -> Result<AllowlistConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}
