//! `webnotice build` and `webnotice version` — the directory-based host.

use std::path::PathBuf;

use webnotice_core::{pipeline, resolve_version};

use crate::{load_effective_config, BuildArgs, GlobalArgs};

/// Runs the `webnotice build` command. Returns exit code 0 on success.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (mut config, config_root) = load_effective_config(global)?;
    if let Some(index) = &args.index {
        config.index_file_path = Some(index.clone());
    }

    let project_dir = match &args.project {
        Some(p) => PathBuf::from(p),
        None => config_root,
    };
    let out_dir = PathBuf::from(&args.dist);
    if !out_dir.is_dir() {
        return Err(format!("output directory {} does not exist", out_dir.display()).into());
    }

    let report = match pipeline::run(&config, &project_dir, &out_dir)? {
        Some(report) => report,
        None => {
            if !global.quiet {
                eprintln!("  webnotice is disabled; nothing published");
            }
            return Ok(0);
        }
    };

    if !global.quiet {
        eprintln!("  Stamped build as version {}", report.version);
        for name in &report.published {
            eprintln!("     Published {name}");
        }
        if report.html_injected {
            eprintln!("     Rewrote {}", out_dir.join(config.index_file()).display());
        } else {
            eprintln!(
                "     Skipped HTML rewrite ({} not found)",
                out_dir.join(config.index_file()).display()
            );
        }
    }
    Ok(0)
}

/// Runs the `webnotice version` command: resolves the version identifier the
/// current build would be stamped with and prints it to stdout.
pub fn run_version(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (config, project_dir) = load_effective_config(global)?;
    let version = resolve_version(&config, &project_dir)?;
    println!("{version}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            config: None,
        }
    }

    #[test]
    fn build_with_config_file_publishes_into_dist() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("webnotice.toml");
        std::fs::write(
            &config_path,
            "version_type = \"custom\"\ncustom_version = \"cli-test\"\n",
        )
        .unwrap();
        let dist = dir.path().join("dist");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html><head></head><body></body></html>")
            .unwrap();

        let args = BuildArgs {
            dist: dist.to_string_lossy().to_string(),
            project: None,
            index: None,
        };
        let global = GlobalArgs {
            quiet: true,
            config: Some(config_path.to_string_lossy().to_string()),
        };
        let code = run(&args, &global).unwrap();
        assert_eq!(code, 0);
        assert!(dist
            .join("pluginWebUpdateNotice/web_update_notice.json")
            .exists());
        let html = std::fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(html.contains("window.pluginWebUpdateNotice_version = 'cli-test';"));
    }

    #[test]
    fn build_rejects_missing_output_directory() {
        let args = BuildArgs {
            dist: "/nonexistent/dist".to_string(),
            project: None,
            index: None,
        };
        assert!(run(&args, &global()).is_err());
    }
}
