//! `shade check`: parse and validate, reporting every problem at once.

use std::path::Path;

use anyhow::{Context, Result, bail};
use shade_core::ThemeConfig;

use super::locate_config;
use crate::output;

pub fn handle(explicit: Option<&Path>) -> Result<()> {
    let path = locate_config(explicit)?;
    let config = ThemeConfig::from_path(&path)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    output::header(&format!("Checking {}", path.display()));
    output::kv("mode", config.effective_mode().as_str());
    output::kv("content globs", &config.content.files.len().to_string());
    output::kv("plugins", &config.plugins.len().to_string());
    output::kv("extend families", &config.extend_colors().len().to_string());

    match config.validate() {
        Ok(()) => {
            output::success("theme config is valid");
            Ok(())
        }
        Err(report) => {
            for violation in report.violations() {
                output::warning(&violation.to_string());
            }
            bail!(
                "{} has {} problem{}",
                path.display(),
                report.len(),
                if report.len() == 1 { "" } else { "s" }
            )
        }
    }
}
