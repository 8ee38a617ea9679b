//! Build version resolution.
//!
//! The version identifier is the single source of truth for "what build is
//! this". It is resolved exactly once per build and embedded byte-identical
//! in the manifest, the inline version tag, and the composed runtime script.
//! Resolution failure is a hard build failure: silently falling back to an
//! empty or garbage version would disable update detection without warning.

use std::path::Path;
use std::process::Command;

use webnotice_config::{ConfigError, NoticeConfig, VersionStrategy};

use crate::error::BuildError;

/// Resolves the version identifier for the current build.
///
/// For a fixed build environment and strategy the result is fixed:
/// `commit-hash` and `package-version` read external build inputs (the VCS
/// head, the project manifest), `build-timestamp` captures the current
/// instant, and `custom` passes the configured string through verbatim.
pub fn resolve_version(config: &NoticeConfig, project_dir: &Path) -> Result<String, BuildError> {
    match config.version_type {
        VersionStrategy::CommitHash => commit_hash(project_dir),
        VersionStrategy::PackageVersion => package_version(project_dir),
        VersionStrategy::BuildTimestamp => Ok(build_timestamp()),
        VersionStrategy::Custom => custom_version(config),
    }
}

/// Queries the short hash of the current source-control revision.
fn commit_hash(project_dir: &Path) -> Result<String, BuildError> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .current_dir(project_dir)
        .output()
        .map_err(|e| BuildError::Vcs {
            reason: format!("failed to run git: {e}"),
        })?;

    if !output.status.success() {
        return Err(BuildError::Vcs {
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if hash.is_empty() {
        return Err(BuildError::Vcs {
            reason: "git returned an empty revision".to_string(),
        });
    }
    Ok(hash)
}

/// Reads the declared version of the project being built.
///
/// Looks for `package.json` first (the common case for web projects), then
/// falls back to a `Cargo.toml` `[package]` table.
fn package_version(project_dir: &Path) -> Result<String, BuildError> {
    let package_json = project_dir.join("package.json");
    if package_json.exists() {
        let content =
            std::fs::read_to_string(&package_json).map_err(|e| BuildError::PackageMeta {
                path: package_json.clone(),
                reason: e.to_string(),
            })?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| BuildError::PackageMeta {
                path: package_json.clone(),
                reason: e.to_string(),
            })?;
        return match value.get("version").and_then(|v| v.as_str()) {
            Some(version) if !version.is_empty() => Ok(version.to_string()),
            _ => Err(BuildError::PackageMeta {
                path: package_json,
                reason: "no non-empty \"version\" field".to_string(),
            }),
        };
    }

    let cargo_toml = project_dir.join("Cargo.toml");
    if cargo_toml.exists() {
        let content = std::fs::read_to_string(&cargo_toml).map_err(|e| BuildError::PackageMeta {
            path: cargo_toml.clone(),
            reason: e.to_string(),
        })?;
        let value: toml::Value =
            toml::from_str(&content).map_err(|e| BuildError::PackageMeta {
                path: cargo_toml.clone(),
                reason: e.to_string(),
            })?;
        return match value
            .get("package")
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
        {
            Some(version) if !version.is_empty() => Ok(version.to_string()),
            _ => Err(BuildError::PackageMeta {
                path: cargo_toml,
                reason: "no non-empty package.version field".to_string(),
            }),
        };
    }

    Err(BuildError::PackageMeta {
        path: project_dir.to_path_buf(),
        reason: "no package.json or Cargo.toml found".to_string(),
    })
}

/// Captures the current UTC instant as a fixed-width millisecond timestamp.
///
/// Thirteen zero-padded digits keep the string sortable: lexicographic order
/// equals chronological order, and two builds a millisecond apart are
/// distinguishable.
fn build_timestamp() -> String {
    format!("{:013}", chrono::Utc::now().timestamp_millis())
}

/// Returns the configured custom version, rejecting empty values.
fn custom_version(config: &NoticeConfig) -> Result<String, BuildError> {
    match config.custom_version.as_deref() {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(ConfigError::MissingField("custom_version".to_string()).into()),
    }
}
