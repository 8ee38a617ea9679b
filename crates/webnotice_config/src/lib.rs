//! Parsing and validation of `webnotice.toml` configuration files.
//!
//! This crate reads the plugin configuration and produces a strongly-typed
//! [`NoticeConfig`] describing how the build is versioned, which assets are
//! published, and how the browser runtime polls and notifies.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
