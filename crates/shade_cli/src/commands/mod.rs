//! Command dispatch and the config lookup every command shares.

pub mod check;
pub mod color;
pub mod export;
pub mod init;
pub mod palette;
pub mod scan;
pub mod show;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use shade_constant::app::CONFIG_ENV;
use shade_core::{ThemeConfig, find_config_upward};
use shade_observability::{config_span, record_error};

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    let explicit = cli.config;
    match cli.command {
        Command::Check => check::handle(explicit.as_deref()),
        Command::Show => show::handle(explicit.as_deref()),
        Command::Color {
            family,
            shade,
            resolved,
        } => color::handle(explicit.as_deref(), &family, &shade, resolved),
        Command::Palette => palette::handle(explicit.as_deref()),
        Command::Scan {
            root,
            max_files,
            exclude,
        } => scan::handle(explicit.as_deref(), root, max_files, exclude).await,
        Command::Export { format } => export::handle(explicit.as_deref(), format),
        Command::Init { path, force } => init::handle(path, force),
    }
}

/// `--config`, then `$SHADE_CONFIG`, then the nearest `shade.toml` /
/// `shade.json` above the working directory.
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let cwd = env::current_dir().context("cannot read the working directory")?;
    find_config_upward(&cwd).ok_or_else(|| {
        anyhow!(
            "no shade.toml or shade.json found in {} or its parents (run `shade init` to create one)",
            cwd.display()
        )
    })
}

/// Locate, parse, and validate the theme config.
pub fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, ThemeConfig)> {
    let path = locate_config(explicit)?;
    let span = config_span!(path.display());
    let _guard = span.enter();

    match ThemeConfig::load(&path) {
        Ok(config) => Ok((path, config)),
        Err(e) => {
            record_error(&e);
            Err(anyhow::Error::new(e).context(format!("failed to load {}", path.display())))
        }
    }
}
