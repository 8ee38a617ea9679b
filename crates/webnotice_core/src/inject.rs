//! HTML rewriting: wiring the published assets into the served page.

use std::path::Path;

use webnotice_common::{
    asset_url, hashed_asset_name, ContentHash, ANCHOR_CLASS_NAME, SCRIPT_FILE_NAME,
    STYLE_FILE_NAME, VERSION_GLOBAL,
};
use webnotice_config::NoticeConfig;

use crate::error::BuildError;
use crate::script::js_single_quoted;

/// Content hashes of the published assets, as recorded by the build session.
///
/// The stylesheet hash is absent when the default notification is hidden and
/// no stylesheet was published.
#[derive(Debug, Clone, Copy)]
pub struct AssetHashes {
    /// Hash of the published stylesheet, if one was published.
    pub css: Option<ContentHash>,
    /// Hash of the published runtime script.
    pub js: ContentHash,
}

/// Rewrites a page to reference the published assets and expose the version.
///
/// Two independent one-shot rewrites:
///
/// - immediately after the first `<head>`: the stylesheet link (unless the
///   default notification is hidden or the page ships custom notification
///   markup), the hashed runtime script tag, and an inline script assigning
///   `window.pluginWebUpdateNotice_version`;
/// - immediately before the first `</body>`: the anchor element the default
///   widget mounts into, unless the default notification is hidden.
///
/// A document lacking either marker gets the corresponding rewrite skipped
/// silently. Running the function twice duplicates the inserted tags; the
/// rewrite is not idempotent and callers apply it once per build.
pub fn inject(html: &str, version: &str, config: &NoticeConfig, hashes: &AssetHashes) -> String {
    let base = config.inject_base();

    let mut head_inserts = Vec::new();
    if config.wants_default_style() {
        if let Some(css) = &hashes.css {
            let href = asset_url(base, &hashed_asset_name(STYLE_FILE_NAME, css, "css"));
            head_inserts.push(format!("<link rel=\"stylesheet\" href=\"{href}\">"));
        }
    }
    let src = asset_url(base, &hashed_asset_name(SCRIPT_FILE_NAME, &hashes.js, "js"));
    head_inserts.push(format!("<script src=\"{src}\"></script>"));
    head_inserts.push(format!(
        "<script>window.{VERSION_GLOBAL} = '{}';</script>",
        js_single_quoted(version)
    ));

    let head_block = format!("<head>\n    {}", head_inserts.join("\n    "));
    let mut res = html.replacen("<head>", &head_block, 1);

    if !config.hidden_default_notification {
        let anchor = format!("<div class=\"{ANCHOR_CLASS_NAME}\"></div></body>");
        res = res.replacen("</body>", &anchor, 1);
    }

    res
}

/// Reads, rewrites, and writes back the HTML file at `path`.
///
/// An absent or unreadable target yields [`BuildError::MissingTarget`]; the
/// pipeline reports it and continues, since the assets themselves are
/// already published.
pub fn inject_file(
    path: &Path,
    version: &str,
    config: &NoticeConfig,
    hashes: &AssetHashes,
) -> Result<(), BuildError> {
    let html = std::fs::read_to_string(path).map_err(|e| BuildError::MissingTarget {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rewritten = inject(&html, version, config, hashes);
    std::fs::write(path, rewritten).map_err(|e| BuildError::MissingTarget {
        path: path.to_path_buf(),
        source: e,
    })
}
