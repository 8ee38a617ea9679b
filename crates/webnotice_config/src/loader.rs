//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{NoticeConfig, VersionStrategy};
use std::path::Path;

/// Name of the configuration file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "webnotice.toml";

/// Loads and validates a `webnotice.toml` configuration from a project
/// directory.
pub fn load_config(project_dir: &Path) -> Result<NoticeConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<NoticeConfig, ConfigError> {
    let config: NoticeConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates cross-field invariants that serde defaults cannot express.
pub fn validate_config(config: &NoticeConfig) -> Result<(), ConfigError> {
    if config.version_type == VersionStrategy::Custom
        && config
            .custom_version
            .as_deref()
            .map_or(true, |v| v.is_empty())
    {
        return Err(ConfigError::MissingField("custom_version".to_string()));
    }
    if let Some(base) = &config.inject_file_base {
        if !base.is_empty() && !base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "inject_file_base must end in '/': got '{base}'"
            )));
        }
    }
    Ok(())
}
