//! `shade export`: write the resolved palette to stdout.

use std::path::Path;

use anyhow::Result;

use super::load_config;
use crate::cli::ExportFormat;

pub fn handle(explicit: Option<&Path>, format: ExportFormat) -> Result<()> {
    let (_, config) = load_config(explicit)?;
    let palette = config.resolve().palette;

    let rendered = match format {
        ExportFormat::Css => palette.to_css_variables(),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&palette)?;
            json.push('\n');
            json
        }
        ExportFormat::Toml => toml::to_string_pretty(&palette)?,
    };
    print!("{rendered}");
    Ok(())
}
