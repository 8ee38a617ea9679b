//! Error types for the build pipeline.

use std::path::PathBuf;

/// Errors that can occur while stamping a build and publishing its assets.
///
/// Configuration and asset-template errors are unrecoverable for the current
/// build: no partial, half-hashed asset set is ever published. A missing
/// injection target is the one recoverable case — assets are already on
/// disk, only the HTML-reference step is skipped — and the pipeline reports
/// it instead of failing the build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configuration is invalid or missing a required option.
    #[error(transparent)]
    Config(#[from] webnotice_config::ConfigError),

    /// The source-control revision could not be queried.
    #[error("failed to resolve commit hash: {reason}")]
    Vcs {
        /// Description of the VCS failure.
        reason: String,
    },

    /// The project's declared version could not be read.
    #[error("failed to read package version from {path}: {reason}")]
    PackageMeta {
        /// The metadata file that was attempted.
        path: PathBuf,
        /// Description of the read or parse failure.
        reason: String,
    },

    /// A configured asset template or stylesheet could not be read.
    #[error("failed to read asset template {path}: {source}")]
    AssetRead {
        /// The template file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The HTML file to inject into is absent or unreadable.
    #[error("injection target {path} is missing or unreadable: {source}")]
    MissingTarget {
        /// The resolved path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An asset could not be written to the build output.
    #[error("failed to publish asset '{name}': {source}")]
    Publish {
        /// The output-relative asset name.
        name: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A payload could not be serialized to JSON.
    #[error("failed to serialize {what}: {reason}")]
    Serialize {
        /// What was being serialized.
        what: &'static str,
        /// Description of the serialization failure.
        reason: String,
    },
}
