pub mod allowlist;
pub mod config;
pub mod logging;
