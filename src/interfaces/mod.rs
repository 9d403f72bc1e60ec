//! User interfaces
//!
//! - `cli`: command handlers behind the `shorturl` binary

#[cfg(feature = "cli")]
pub mod cli;
