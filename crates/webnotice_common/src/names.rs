//! Naming vocabulary shared between the build pipeline and the browser runtime.
//!
//! Every published asset lives under [`ASSET_DIRECTORY`] in the build output.
//! The version manifest keeps a fixed, un-hashed name so the polling client
//! can always locate it without knowing anything produced at build time; the
//! stylesheet and script carry a content-hash segment instead, so caches can
//! hold them forever without ever serving a stale copy under a new URL.

use crate::ContentHash;

/// Directory inside the build output that receives all published assets.
pub const ASSET_DIRECTORY: &str = "pluginWebUpdateNotice";

/// Stem of the fixed-name version manifest (published as `<stem>.json`).
pub const MANIFEST_FILE_NAME: &str = "web_update_notice";

/// Stem of the content-hashed runtime script (published as `<stem>.<hash>.js`).
pub const SCRIPT_FILE_NAME: &str = "webUpdateNotice";

/// Stem of the content-hashed stylesheet (published as `<stem>.<hash>.css`).
pub const STYLE_FILE_NAME: &str = "webUpdateNoticeStyle";

/// Class of the anchor element the default notification widget mounts into.
pub const ANCHOR_CLASS_NAME: &str = "plugin-web-update-notice-anchor";

/// Name of the custom event dispatched on `document.body` when a new version
/// is detected.
pub const UPDATE_EVENT_NAME: &str = "plugin_web_update_notice";

/// Name of the page-global variable (on `window`) holding the version the
/// page was built with.
pub const VERSION_GLOBAL: &str = "pluginWebUpdateNotice_version";

/// Returns the output-relative name of the fixed manifest asset.
pub fn manifest_asset_name() -> String {
    format!("{ASSET_DIRECTORY}/{MANIFEST_FILE_NAME}.json")
}

/// Returns the output-relative name of a content-hashed asset.
pub fn hashed_asset_name(stem: &str, hash: &ContentHash, ext: &str) -> String {
    format!("{ASSET_DIRECTORY}/{stem}.{}.{ext}", hash.short())
}

/// Composes the URL a page uses to reference a published asset.
///
/// `base` must be empty (relative) or end in `/` — an absolute pathname like
/// `/app/` or a full URL like `https://cdn.example.com/`.
pub fn asset_url(base: &str, asset_name: &str) -> String {
    format!("{base}{asset_name}")
}
