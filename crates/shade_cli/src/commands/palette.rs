//! `shade palette`: the resolved palette as a table of swatches.

use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;

use super::load_config;
use crate::output;

pub fn handle(explicit: Option<&Path>) -> Result<()> {
    let (_, config) = load_config(explicit)?;
    let theme = config.resolve();

    let mut table = output::table();
    output::table_header(&mut table, &["Family", "Shade", "Hex", "", "Source"]);
    let mut items = Vec::new();

    for (token, color) in theme.palette.entries() {
        let source = if config.extend_colors().contains(&token) {
            "extend"
        } else {
            "base"
        };
        table.add_row(vec![
            Cell::new(&token.family),
            Cell::new(token.shade.to_string()),
            Cell::new(color.to_string()),
            output::swatch(color),
            Cell::new(source),
        ]);
        items.push(serde_json::json!({
            "token": token.to_string(),
            "family": token.family,
            "shade": token.shade.to_string(),
            "hex": color.to_string(),
            "source": source,
        }));
    }

    if !output::is_json() {
        output::header(&format!(
            "{} families, {} colors ({} mode)",
            theme.palette.len(),
            theme.palette.color_count(),
            theme.mode
        ));
    }
    output::table_print(&table, serde_json::Value::Array(items));
    Ok(())
}
