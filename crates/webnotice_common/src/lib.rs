//! Shared foundational types for the webnotice build pipeline.
//!
//! This crate provides content hashing for cache-busting asset names and the
//! naming vocabulary (directory name, fixed manifest name, injected globals)
//! shared between the build-time pipeline and the browser runtime.

#![warn(missing_docs)]

pub mod hash;
pub mod names;

pub use hash::ContentHash;
pub use names::{
    asset_url, hashed_asset_name, manifest_asset_name, ANCHOR_CLASS_NAME, ASSET_DIRECTORY,
    MANIFEST_FILE_NAME, SCRIPT_FILE_NAME, STYLE_FILE_NAME, UPDATE_EVENT_NAME, VERSION_GLOBAL,
};
