//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `webnotice.toml`
/// configuration.
///
/// Configuration errors are fatal for the build step that depends on them: a
/// build with an invalid or missing required option must not publish a
/// partial asset set.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}
