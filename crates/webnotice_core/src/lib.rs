//! Build-time core of webnotice: version resolution, asset generation, and
//! HTML injection.
//!
//! One build invocation flows through a [`BuildSession`](pipeline::BuildSession):
//! the version identifier is resolved once, the manifest / stylesheet /
//! runtime script payloads are generated and handed to an
//! [`AssetPublisher`](publish::AssetPublisher), and the target HTML document
//! is rewritten to reference the published, content-hash-named files. The
//! browser-side polling contract implemented by the shipped script is
//! modeled in [`poller`] so its semantics stay unit-testable.

#![warn(missing_docs)]

pub mod error;
pub mod inject;
pub mod manifest;
pub mod pipeline;
pub mod poller;
pub mod publish;
pub mod script;
pub mod version;

pub use error::BuildError;
pub use inject::{inject, AssetHashes};
pub use manifest::UpdateManifest;
pub use pipeline::{run, BuildReport, BuildSession};
pub use poller::{PollOutcome, PollerState};
pub use publish::{AssetPayload, AssetPublisher, DirPublisher, MemoryPublisher};
pub use version::resolve_version;

/// Default runtime script template shipped with the crate.
pub const DEFAULT_SCRIPT_TEMPLATE: &str = include_str!("../assets/update-notice.js");

/// Default notification stylesheet shipped with the crate.
pub const DEFAULT_STYLE_SHEET: &str = include_str!("../assets/update-notice.css");
