//! Asset publishing: the narrow seam between the core and the host build
//! tool.
//!
//! The core never touches the host's compilation machinery; it only needs
//! "publish this named content into the build output". [`DirPublisher`]
//! implements that over a plain output directory (the CLI host),
//! [`MemoryPublisher`] collects payloads for tests, and an embedding build
//! tool can provide its own implementation over its asset pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// A named logical asset paired with its content.
///
/// The name is output-relative and already includes the asset directory
/// prefix and, for hashed assets, the content-hash segment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPayload {
    /// Output-relative asset name, e.g. `pluginWebUpdateNotice/x.1a2b3c4d.js`.
    pub name: String,
    /// The asset's text content.
    pub content: String,
}

/// Publishes named content into the build output.
///
/// Within one build every publish targets a unique name, so implementations
/// may batch or reorder writes freely.
pub trait AssetPublisher {
    /// Publishes one asset under its output-relative name.
    fn publish(&mut self, payload: &AssetPayload) -> Result<(), BuildError>;
}

/// An [`AssetPublisher`] writing assets under an output directory root.
pub struct DirPublisher {
    root: PathBuf,
}

impl DirPublisher {
    /// Creates a publisher rooted at the given output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the on-disk path an asset name resolves to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl AssetPublisher for DirPublisher {
    fn publish(&mut self, payload: &AssetPayload) -> Result<(), BuildError> {
        let path = self.path_for(&payload.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::Publish {
                name: payload.name.clone(),
                source: e,
            })?;
        }
        std::fs::write(&path, &payload.content).map_err(|e| BuildError::Publish {
            name: payload.name.clone(),
            source: e,
        })
    }
}

/// An [`AssetPublisher`] collecting payloads in memory, for tests and for
/// hosts that hand assets to their own emission hooks.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    assets: BTreeMap<String, String>,
}

impl MemoryPublisher {
    /// Creates an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content published under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assets.get(name).map(String::as_str)
    }

    /// Returns all published names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.assets.keys().map(String::as_str).collect()
    }

    /// Returns the number of published assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetPublisher for MemoryPublisher {
    fn publish(&mut self, payload: &AssetPayload) -> Result<(), BuildError> {
        self.assets
            .insert(payload.name.clone(), payload.content.clone());
        Ok(())
    }
}

/// Convenience for hosts that want plain file writes without a publisher
/// value, e.g. one-off asset dumps in tests.
pub fn write_asset(root: &Path, payload: &AssetPayload) -> Result<(), BuildError> {
    DirPublisher::new(root).publish(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, content: &str) -> AssetPayload {
        AssetPayload {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn dir_publisher_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut publisher = DirPublisher::new(dir.path());
        publisher
            .publish(&payload("pluginWebUpdateNotice/web_update_notice.json", "{}"))
            .unwrap();
        let written = dir
            .path()
            .join("pluginWebUpdateNotice")
            .join("web_update_notice.json");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "{}");
    }

    #[test]
    fn dir_publisher_error_names_asset() {
        // A file where a directory is needed forces the create_dir_all to fail.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pluginWebUpdateNotice"), "occupied").unwrap();
        let mut publisher = DirPublisher::new(dir.path());
        let err = publisher
            .publish(&payload("pluginWebUpdateNotice/x.js", "content"))
            .unwrap_err();
        match err {
            BuildError::Publish { name, .. } => assert_eq!(name, "pluginWebUpdateNotice/x.js"),
            other => panic!("expected Publish error, got {other:?}"),
        }
    }

    #[test]
    fn memory_publisher_collects() {
        let mut publisher = MemoryPublisher::new();
        assert!(publisher.is_empty());
        publisher.publish(&payload("a/one.json", "1")).unwrap();
        publisher.publish(&payload("a/two.css", "2")).unwrap();
        assert_eq!(publisher.len(), 2);
        assert_eq!(publisher.get("a/one.json"), Some("1"));
        assert_eq!(publisher.names(), vec!["a/one.json", "a/two.css"]);
        assert_eq!(publisher.get("a/missing"), None);
    }

    #[test]
    fn write_asset_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        write_asset(dir.path(), &payload("n/f.css", ".a{}")).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("n/f.css")).unwrap(),
            ".a{}"
        );
    }
}
