//! The build-scoped pipeline: one session per build invocation.
//!
//! A [`BuildSession`] owns everything one build computes — the resolved
//! version and the content hashes of the published assets — and is discarded
//! with the build. Nothing is cached across builds and no module-level
//! state exists; a host embedding the core threads the session through its
//! own hooks instead.

use std::path::Path;

use tracing::{info, warn};

use webnotice_common::{hashed_asset_name, ContentHash, SCRIPT_FILE_NAME, STYLE_FILE_NAME};
use webnotice_config::NoticeConfig;

use crate::error::BuildError;
use crate::inject::{self, AssetHashes};
use crate::manifest;
use crate::publish::{AssetPayload, AssetPublisher, DirPublisher};
use crate::script;
use crate::version::resolve_version;
use crate::{DEFAULT_SCRIPT_TEMPLATE, DEFAULT_STYLE_SHEET};

/// Accumulator for one build invocation.
///
/// Created once per build; the version is resolved exactly once at
/// construction and every later step reuses that value, keeping the
/// manifest, the inline version tag, and the composed script byte-identical.
pub struct BuildSession {
    config: NoticeConfig,
    version: String,
    css_hash: Option<ContentHash>,
    js_hash: Option<ContentHash>,
    published: Vec<String>,
}

impl BuildSession {
    /// Resolves the build version and opens a session.
    pub fn new(config: NoticeConfig, project_dir: &Path) -> Result<Self, BuildError> {
        let version = resolve_version(&config, project_dir)?;
        if config.log_version {
            info!(version = %version, "resolved build version");
        }
        Ok(Self {
            config,
            version,
            css_hash: None,
            js_hash: None,
            published: Vec::new(),
        })
    }

    /// Returns the version identifier resolved for this build.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the session's configuration.
    pub fn config(&self) -> &NoticeConfig {
        &self.config
    }

    /// Returns the hashes recorded by [`publish_assets`](Self::publish_assets),
    /// or `None` before assets were published.
    pub fn asset_hashes(&self) -> Option<AssetHashes> {
        self.js_hash.map(|js| AssetHashes {
            css: self.css_hash,
            js,
        })
    }

    /// Returns the output-relative names published so far.
    pub fn published(&self) -> &[String] {
        &self.published
    }

    /// Generates and publishes the build's assets.
    ///
    /// Emits the fixed-name manifest, the content-hashed stylesheet (unless
    /// the default notification is hidden), and the content-hashed composed
    /// runtime script. All payloads are generated and hashed before the
    /// first publish call, so a template or serialization failure never
    /// leaves a partial asset set in the output.
    pub fn publish_assets(
        &mut self,
        publisher: &mut dyn AssetPublisher,
    ) -> Result<AssetHashes, BuildError> {
        let mut payloads = Vec::with_capacity(3);
        payloads.push(manifest::generate(&self.version, self.config.silence)?);

        let css_hash = if self.config.hidden_default_notification {
            None
        } else {
            let style = self.load_style_sheet()?;
            let hash = ContentHash::from_bytes(style.as_bytes());
            payloads.push(AssetPayload {
                name: hashed_asset_name(STYLE_FILE_NAME, &hash, "css"),
                content: style,
            });
            Some(hash)
        };

        let template = self.load_script_template()?;
        let composed = script::compose(&template, &self.version, &self.config)?;
        let js_hash = ContentHash::from_bytes(composed.as_bytes());
        payloads.push(AssetPayload {
            name: hashed_asset_name(SCRIPT_FILE_NAME, &js_hash, "js"),
            content: composed,
        });

        for payload in &payloads {
            publisher.publish(payload)?;
            self.published.push(payload.name.clone());
        }

        self.css_hash = css_hash;
        self.js_hash = Some(js_hash);
        Ok(AssetHashes {
            css: css_hash,
            js: js_hash,
        })
    }

    /// Rewrites the HTML file at `path` to reference the published assets.
    pub fn inject_into_file(&self, path: &Path, hashes: &AssetHashes) -> Result<(), BuildError> {
        inject::inject_file(path, &self.version, &self.config, hashes)
    }

    /// Returns the stylesheet content, honoring a configured override file.
    fn load_style_sheet(&self) -> Result<String, BuildError> {
        match &self.config.style_sheet {
            Some(path) => std::fs::read_to_string(path).map_err(|e| BuildError::AssetRead {
                path: path.clone(),
                source: e,
            }),
            None => Ok(DEFAULT_STYLE_SHEET.to_string()),
        }
    }

    /// Returns the runtime script template, honoring a configured override.
    fn load_script_template(&self) -> Result<String, BuildError> {
        match &self.config.script_template {
            Some(path) => std::fs::read_to_string(path).map_err(|e| BuildError::AssetRead {
                path: path.clone(),
                source: e,
            }),
            None => Ok(DEFAULT_SCRIPT_TEMPLATE.to_string()),
        }
    }
}

/// Summary of one completed build run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The version identifier stamped into this build.
    pub version: String,
    /// Output-relative names of the published assets.
    pub published: Vec<String>,
    /// Whether the HTML rewrite was applied (false when the target file was
    /// missing and the step was skipped).
    pub html_injected: bool,
}

/// Runs the whole pipeline for a directory-based host: publish assets under
/// `out_dir`, then rewrite the configured HTML file in place.
///
/// Returns `None` without touching the output when the plugin is disabled.
/// A missing HTML target is reported at warn level with the resolved path
/// and leaves the build successful — the assets are already published, only
/// the reference step is skipped. Every other error aborts the build.
pub fn run(
    config: &NoticeConfig,
    project_dir: &Path,
    out_dir: &Path,
) -> Result<Option<BuildReport>, BuildError> {
    if !config.enabled {
        return Ok(None);
    }

    let mut session = BuildSession::new(config.clone(), project_dir)?;
    let mut publisher = DirPublisher::new(out_dir);
    let hashes = session.publish_assets(&mut publisher)?;

    let html_path = out_dir.join(config.index_file());
    let html_injected = match session.inject_into_file(&html_path, &hashes) {
        Ok(()) => true,
        Err(BuildError::MissingTarget { path, source }) => {
            warn!(path = %path.display(), error = %source, "skipping HTML injection");
            false
        }
        Err(other) => return Err(other),
    };

    Ok(Some(BuildReport {
        version: session.version.clone(),
        published: session.published.clone(),
        html_injected,
    }))
}
