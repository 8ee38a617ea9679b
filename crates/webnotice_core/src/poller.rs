//! The client-side polling contract, modeled as an owned state machine.
//!
//! The browser runtime shipped in `assets/update-notice.js` implements this
//! behavior with a timer loop and `fetch`; this module keeps the decision
//! logic itself — when a manifest observation must raise a notification — as
//! a pure type so the contract is testable without a browser. State flow:
//!
//! ```text
//! Idle → Polling → (NoChange → Polling) | (Changed → Notified)
//! ```
//!
//! `Notified` is sticky per version: the same new version never notifies
//! twice, but a further version change re-arms notification. Fetch failures
//! never reach [`PollerState::observe`]; the runtime just retries on the
//! next tick.

use crate::manifest::UpdateManifest;

/// Decision produced by one successful manifest observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The published version matches what this page already knows.
    NoChange,
    /// A new version was detected; notify exactly once with this version.
    Notify(String),
    /// A new version was detected but the manifest is marked silent, or the
    /// page was already notified for it.
    Suppressed,
}

/// The poller's entire mutable state: the page's baseline version and the
/// version most recently notified for.
///
/// Owned exclusively by the single runtime poll loop; there is no other
/// shared state in the contract.
#[derive(Debug, Clone)]
pub struct PollerState {
    baseline: String,
    notified_for: Option<String>,
}

impl PollerState {
    /// Creates a poller for a page built as `baseline`.
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            notified_for: None,
        }
    }

    /// Returns the version baked into the page at load time.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Feeds one successfully fetched manifest into the state machine.
    pub fn observe(&mut self, manifest: &UpdateManifest) -> PollOutcome {
        if manifest.version == self.baseline {
            return PollOutcome::NoChange;
        }
        if self.notified_for.as_deref() == Some(manifest.version.as_str()) {
            return PollOutcome::Suppressed;
        }
        if manifest.silence {
            return PollOutcome::Suppressed;
        }
        self.notified_for = Some(manifest.version.clone());
        PollOutcome::Notify(manifest.version.clone())
    }
}
