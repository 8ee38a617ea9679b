//! `webnotice init` — configuration scaffolding command.
//!
//! Writes a `webnotice.toml` with documented defaults into the target
//! directory, refusing to overwrite an existing file.

use std::fs;
use std::path::PathBuf;

use webnotice_config::loader::CONFIG_FILE_NAME;

/// Template written by `webnotice init`. Every entry mirrors a default, so
/// an untouched file behaves exactly like having no file at all.
const CONFIG_TEMPLATE: &str = r#"# webnotice configuration.
# All settings are optional; the values shown are the defaults.

# How the build's version identifier is resolved:
# "commit-hash" | "package-version" | "build-timestamp" | "custom"
version_type = "commit-hash"

# Required when version_type is "custom".
# custom_version = "2024-11-rollout"

# Polling interval of the deployed page, in milliseconds.
check_interval = 600000

# Log the baked-in version to the browser console.
log_version = true

# Mark this deployment as not user-facing: clients detect it but stay quiet.
silence = false

# Hide the built-in notification widget. The update event still fires.
hidden_default_notification = false

# Hide the dismiss button on the built-in widget.
hidden_dismiss_button = false

# Base public path for injected asset URLs; must end in "/".
# inject_file_base = "/"

# HTML file to rewrite, relative to the output directory.
# index_file_path = "index.html"

# [notification]
# title = "New version available"
# description = "A new version of this site has been published."
# button_text = "Refresh"
# dismiss_button_text = "Dismiss"

# [locale_data.en_US]
# title = "New version available"
"#;

/// Runs the `webnotice init` command. Returns exit code 0 on success.
pub fn run(dir: Option<String>) -> Result<i32, Box<dyn std::error::Error>> {
    let target_dir = match &dir {
        Some(d) => {
            let path = PathBuf::from(d);
            fs::create_dir_all(&path)?;
            path
        }
        None => std::env::current_dir()?,
    };

    let config_path = target_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(format!("{} already exists", config_path.display()).into());
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    eprintln!("  Created {}", config_path.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use webnotice_config::{loader, NoticeConfig};

    #[test]
    fn init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("site");
        let code = run(Some(target.to_string_lossy().to_string())).unwrap();
        assert_eq!(code, 0);
        assert!(target.join("webnotice.toml").exists());
    }

    #[test]
    fn init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().to_string_lossy().to_string();
        run(Some(target.clone())).unwrap();
        assert!(run(Some(target)).is_err());
    }

    #[test]
    fn template_parses_to_defaults() {
        let config = loader::load_config_from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, NoticeConfig::default());
    }
}
