//! `shade show`: print the record as loaded.

use std::path::Path;

use anyhow::Result;

use super::load_config;
use crate::output;

pub fn handle(explicit: Option<&Path>) -> Result<()> {
    let (path, config) = load_config(explicit)?;
    if output::is_json() {
        output::data(&path.display().to_string(), &config);
    } else {
        output::dim(&format!("# {}", path.display()));
        print!("{}", config.to_toml_string()?);
    }
    Ok(())
}
