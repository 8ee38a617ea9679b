//! webnotice CLI — stamps a built site with a version and publishes the
//! update-notice assets.
//!
//! Provides `webnotice init` for config scaffolding, `webnotice build` to
//! publish the manifest/stylesheet/script into a build output directory and
//! rewrite its HTML entry point, and `webnotice version` to resolve and
//! print the version identifier the current build would be stamped with.

#![warn(missing_docs)]

mod build;
mod init;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

use webnotice_config::{loader, NoticeConfig};

/// webnotice — version stamping and update notification for web builds.
#[derive(Parser, Debug)]
#[command(name = "webnotice", version, about = "Web build update notification")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `webnotice.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a `webnotice.toml` with documented defaults.
    Init {
        /// Directory to initialize. If omitted, uses the current directory.
        dir: Option<String>,
    },
    /// Publish the update-notice assets into a build output directory.
    Build(BuildArgs),
    /// Resolve and print the version identifier for the current build.
    Version,
}

/// Arguments for the `webnotice build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// The build output directory to publish into (e.g. `dist`).
    pub dist: String,

    /// Project root used for version resolution (git revision, package
    /// metadata). Defaults to the directory the configuration was found in.
    #[arg(long)]
    pub project: Option<String>,

    /// Path of the HTML file to rewrite, relative to the output directory.
    /// Overrides the configured `index_file_path`.
    #[arg(long)]
    pub index: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Init { dir } => init::run(dir),
        Command::Build(ref args) => build::run(args, &global),
        Command::Version => build::run_version(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Locates and loads the effective configuration.
///
/// With `--config`, that file is loaded and its directory becomes the
/// project root. Otherwise the current directory and its ancestors are
/// searched for a `webnotice.toml`; when none exists, defaults apply and
/// the current directory is the project root.
pub fn load_effective_config(
    global: &GlobalArgs,
) -> Result<(NoticeConfig, PathBuf), Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let path = PathBuf::from(config_path);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let config = loader::load_config_from_str(&content)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));
        return Ok((config, root));
    }

    let mut current = std::env::current_dir()?;
    loop {
        if current.join(loader::CONFIG_FILE_NAME).exists() {
            let config = loader::load_config(&current)?;
            return Ok((config, current));
        }
        if !current.pop() {
            return Ok((NoticeConfig::default(), std::env::current_dir()?));
        }
    }
}
