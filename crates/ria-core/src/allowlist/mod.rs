//! Remote-image allowlist.
//!
//! An ordered list of `(protocol, hostname, port, pathname)` patterns
//! declaring which remote hosts an image pipeline may fetch from. The list is
//! validated and compiled once at startup ([`Allowlist::compile`]) and is
//! immutable afterwards; a candidate URL is permitted when any entry matches
//! on all four parts. No entry matching means the caller must reject the
//! fetch.

mod entry;
mod error;
mod glob;
mod matcher;

pub use entry::{Protocol, RemotePattern};
pub use error::AllowlistError;
pub use matcher::Allowlist;
