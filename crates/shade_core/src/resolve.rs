//! The theme a build actually sees: base palette plus the extension.

use serde::Serialize;

use crate::color::HexColor;
use crate::config::ThemeConfig;
use crate::mode::{Mode, ScanStrategy};
use crate::palette::{ColorPalette, ColorToken};
use crate::shade::{ShadeKey, Shades};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    pub mode: Mode,
    pub palette: ColorPalette,
}

impl ResolvedTheme {
    /// `theme.colors` (or the built-in palette) with `theme.extend.colors`
    /// deep-merged over it.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = match &config.theme.colors {
            Some(colors) => colors.clone(),
            None => ColorPalette::defaults(),
        };
        let palette = base.merged_with(&config.theme.extend.colors);
        tracing::debug!(
            families = palette.len(),
            colors = palette.color_count(),
            overridden_base = config.theme.colors.is_some(),
            "resolved theme palette"
        );
        Self {
            mode: config.effective_mode(),
            palette,
        }
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.mode.strategy()
    }

    pub fn color(&self, family: &str, shade: ShadeKey) -> Option<HexColor> {
        self.palette.color(family, shade)
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.palette.contains(token)
    }

    pub fn families(&self) -> impl Iterator<Item = (&str, &Shades)> + '_ {
        self.palette.families()
    }

    pub fn tokens(&self) -> impl Iterator<Item = ColorToken> + '_ {
        self.palette.tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_resolves_over_defaults() {
        let resolved = ThemeConfig::reference().resolve();

        // extension overrides the default gray-900
        assert_eq!(
            resolved.color("gray", ShadeKey::Step(900)).unwrap().to_string(),
            "#121826"
        );
        // untouched defaults survive
        assert_eq!(
            resolved.color("gray", ShadeKey::Step(500)).unwrap().to_string(),
            "#6B7280"
        );
        assert!(resolved.color("red", ShadeKey::Step(500)).is_some());
        assert_eq!(resolved.strategy(), ScanStrategy::PerFile);
    }

    #[test]
    fn test_base_override_drops_defaults() {
        let config = ThemeConfig::reference().with_base_colors(
            ColorPalette::new().with_family("ink", Shades::new().with(900u16, HexColor::new(0, 0, 0))),
        );
        let resolved = config.resolve();
        assert!(resolved.color("red", ShadeKey::Step(500)).is_none());
        assert!(resolved.color("ink", ShadeKey::Step(900)).is_some());
        assert!(resolved.color("blue", ShadeKey::Step(600)).is_some());
        assert_eq!(resolved.palette.len(), 3);
        let names: Vec<&str> = resolved.families().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["blue", "gray", "ink"]);
    }

    #[test]
    fn test_aot_precompiles() {
        let resolved = ThemeConfig::reference().with_mode(Mode::Aot).resolve();
        assert_eq!(resolved.strategy(), ScanStrategy::Precompile);
    }
}
