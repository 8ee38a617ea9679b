//! Configuration types deserialized from `webnotice.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The top-level plugin configuration parsed from `webnotice.toml`.
///
/// Every field is optional in the file; defaults reproduce the stock
/// behavior (commit-hash versioning, ten-minute polling, default widget
/// shown). The struct also serializes to JSON — that serialization is what
/// the composed runtime script receives as its options object, so
/// build-machine-only fields (template override paths, the HTML file
/// location) are excluded from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Strategy used to resolve the build's version identifier.
    pub version_type: VersionStrategy,
    /// Version string used verbatim when `version_type` is `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_version: Option<String>,
    /// Polling interval of the browser runtime, in milliseconds.
    pub check_interval: u64,
    /// Whether the runtime logs the baked-in version to the console.
    pub log_version: bool,
    /// Marks the deployment as not user-facing: the manifest carries
    /// `silence: true` and clients suppress notification for it.
    pub silence: bool,
    /// Master switch for the whole plugin; a disabled build publishes
    /// nothing and leaves the HTML untouched.
    #[serde(skip_serializing)]
    pub enabled: bool,
    /// Notification text overrides. Takes precedence over any locale entry.
    pub notification: NotificationProps,
    /// Locale the widget renders in. Unset means `en_US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Per-locale notification text, keyed by locale code. Later entries for
    /// the same key win when merged over the built-in presets.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locale_data: BTreeMap<String, NotificationProps>,
    /// Custom notification markup supplied by the host page. When set, the
    /// default stylesheet link is not injected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_notification_html: Option<String>,
    /// Hides the built-in widget entirely; the update event still fires so
    /// the page can render its own notification.
    pub hidden_default_notification: bool,
    /// Hides the dismiss button on the built-in widget.
    pub hidden_dismiss_button: bool,
    /// Base public path prepended to injected asset URLs. Must end in `/`
    /// when non-empty; empty means page-relative, unset means `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject_file_base: Option<String>,
    /// Path of the HTML file to rewrite, relative to the output directory.
    /// Unset means `index.html`.
    #[serde(skip_serializing)]
    pub index_file_path: Option<String>,
    /// Overrides the embedded runtime script template with an on-disk file.
    #[serde(skip_serializing)]
    pub script_template: Option<PathBuf>,
    /// Overrides the embedded stylesheet with an on-disk file.
    #[serde(skip_serializing)]
    pub style_sheet: Option<PathBuf>,
}

/// Default polling interval: ten minutes.
const DEFAULT_CHECK_INTERVAL_MS: u64 = 10 * 60 * 1000;

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            version_type: VersionStrategy::default(),
            custom_version: None,
            check_interval: DEFAULT_CHECK_INTERVAL_MS,
            log_version: true,
            silence: false,
            enabled: true,
            notification: NotificationProps::default(),
            locale: None,
            locale_data: BTreeMap::new(),
            custom_notification_html: None,
            hidden_default_notification: false,
            hidden_dismiss_button: false,
            inject_file_base: None,
            index_file_path: None,
            script_template: None,
            style_sheet: None,
        }
    }
}

impl NoticeConfig {
    /// Returns the base public path for injected asset URLs.
    ///
    /// Unset defaults to `/`; an explicitly empty string stays empty,
    /// yielding page-relative URLs.
    pub fn inject_base(&self) -> &str {
        match &self.inject_file_base {
            Some(base) => base.as_str(),
            None => "/",
        }
    }

    /// Returns the output-relative path of the HTML file to rewrite.
    pub fn index_file(&self) -> &str {
        self.index_file_path.as_deref().unwrap_or("index.html")
    }

    /// Returns `true` when the default stylesheet link should be injected.
    ///
    /// The link is skipped when the widget is hidden or the host page ships
    /// its own notification markup.
    pub fn wants_default_style(&self) -> bool {
        !self.hidden_default_notification && self.custom_notification_html.is_none()
    }
}

/// Strategy for resolving the build's version identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionStrategy {
    /// The current source-control revision (short commit hash).
    #[default]
    CommitHash,
    /// The declared version of the project being built.
    PackageVersion,
    /// The build instant as a fixed-width, sortable millisecond timestamp.
    BuildTimestamp,
    /// A caller-supplied string, passed through verbatim.
    Custom,
}

/// Text content of the update notification.
///
/// Fields left unset fall back to the locale presets built into the runtime
/// script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationProps {
    /// Notification title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text below the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Label of the refresh button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Label of the dismiss button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismiss_button_text: Option<String>,
}
