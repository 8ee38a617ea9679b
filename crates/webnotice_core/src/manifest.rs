//! The version manifest polled by deployed clients.

use serde::{Deserialize, Serialize};

use webnotice_common::manifest_asset_name;

use crate::error::BuildError;
use crate::publish::AssetPayload;

/// The JSON document a deployed page polls to learn the currently published
/// version.
///
/// The manifest is the one deliberate exception to content-addressed naming:
/// it is always published under the fixed name
/// `pluginWebUpdateNotice/web_update_notice.json`, because the polling client
/// has to find it without knowing anything produced at build time. The
/// flip side is that the hosting environment should serve it with a short or
/// zero cache lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateManifest {
    /// The version identifier of the published build.
    pub version: String,
    /// When `true`, clients must not notify for this version even if it
    /// differs from their baseline.
    pub silence: bool,
}

impl UpdateManifest {
    /// Creates a manifest for the given version.
    pub fn new(version: impl Into<String>, silence: bool) -> Self {
        Self {
            version: version.into(),
            silence,
        }
    }
}

/// Generates the manifest asset payload for the current build.
pub fn generate(version: &str, silence: bool) -> Result<AssetPayload, BuildError> {
    let manifest = UpdateManifest::new(version, silence);
    let content = serde_json::to_string(&manifest).map_err(|e| BuildError::Serialize {
        what: "version manifest",
        reason: e.to_string(),
    })?;
    Ok(AssetPayload {
        name: manifest_asset_name(),
        content,
    })
}
