//! `shade init`: write a starter config.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use shade_constant::app::CONFIG_FILE_NAMES;
use shade_core::ThemeConfig;

use crate::output;

pub fn handle(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAMES[0]));
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    ThemeConfig::reference()
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}
