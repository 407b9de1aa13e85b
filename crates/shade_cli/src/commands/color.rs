//! `shade color <family> <shade>`

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use shade_core::{ColorToken, ShadeKey};

use super::load_config;
use crate::output;

pub fn handle(explicit: Option<&Path>, family: &str, shade: &str, resolved: bool) -> Result<()> {
    let shade: ShadeKey = shade
        .parse()
        .with_context(|| format!("bad shade `{shade}`"))?;
    let (_, config) = load_config(explicit)?;
    let token = ColorToken::new(family, shade);

    let color = if resolved {
        config.resolve().color(family, shade)
    } else {
        config.color(family, shade)
    };
    let color = color.ok_or_else(|| {
        let scope = if resolved {
            "the resolved palette"
        } else {
            "theme.extend.colors"
        };
        anyhow!("color `{token}` is not defined in {scope}")
    })?;

    if output::is_json() {
        output::data(
            "color",
            &serde_json::json!({ "token": token.to_string(), "hex": color.to_string() }),
        );
    } else {
        // bare value so scripts can capture it
        println!("{color}");
    }
    Ok(())
}
