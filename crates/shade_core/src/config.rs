//! Theme configuration record.
//!
//! One record per project, read from `shade.toml` or `shade.json`. It mirrors
//! the input contract of a utility-class stylesheet build:
//!
//! ```toml
//! mode = "jit"
//! plugins = []
//!
//! [content]
//! files = ["src/**/*.rs", "index.html"]
//!
//! [theme.extend.colors.blue]
//! 600 = "#2563EB"
//! 700 = "#1D4ED8"
//! ```
//!
//! Type-level invariants (hex literals, unique shade keys, well-formed globs)
//! are enforced while deserializing. Cross-field rules live in
//! [`ThemeConfig::validate`].

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::content::{ContentConfig, GlobPattern};
use crate::error::{Result, ShadeError};
use crate::mode::Mode;
use crate::palette::ColorPalette;
use crate::resolve::ResolvedTheme;
use crate::shade::{ShadeKey, Shades};

/// On-disk format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            _ => Err(ShadeError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reference to a plugin. Opaque to shade; only checked for blanks and repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(pub String);

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `theme.extend`: partial overrides deep-merged over the base theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtendSection {
    #[serde(default)]
    pub colors: ColorPalette,
}

/// `theme` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Replaces the built-in palette entirely when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPalette>,

    #[serde(default)]
    pub extend: ExtendSection,
}

/// The theme configuration record.
///
/// Field order matters for TOML output: plain values before tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub theme: ThemeSection,
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The project's own record: JIT mode, Rust sources plus `index.html`,
    /// gray and blue extensions, no plugins.
    pub fn reference() -> Self {
        let hex = |r, g, b| HexColor::new(r, g, b);
        let gray = Shades::new()
            .with(900u16, hex(0x12, 0x18, 0x26))
            .with(800u16, hex(0x1F, 0x29, 0x37))
            .with(700u16, hex(0x37, 0x41, 0x51))
            .with(400u16, hex(0x9C, 0xA3, 0xAF))
            .with(300u16, hex(0xD1, 0xD5, 0xDB));
        let blue = Shades::new()
            .with(600u16, hex(0x25, 0x63, 0xEB))
            .with(700u16, hex(0x1D, 0x4E, 0xD8));

        Self {
            mode: Some(Mode::Jit),
            plugins: Vec::new(),
            content: ContentConfig::from_patterns(["src/**/*.rs", "index.html"])
                .unwrap_or_default(),
            theme: ThemeSection {
                colors: None,
                extend: ExtendSection {
                    colors: ColorPalette::new()
                        .with_family("gray", gray)
                        .with_family("blue", blue),
                },
            },
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_content_file(mut self, pattern: GlobPattern) -> Self {
        self.content.files.push(pattern);
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(PluginRef::new(plugin));
        self
    }

    pub fn with_extend_family(mut self, name: impl Into<String>, shades: Shades) -> Self {
        self.theme.extend.colors = std::mem::take(&mut self.theme.extend.colors)
            .with_family(name, shades);
        self
    }

    pub fn with_base_colors(mut self, palette: ColorPalette) -> Self {
        self.theme.colors = Some(palette);
        self
    }

    /// Mode in effect; an absent `mode` means JIT.
    pub fn effective_mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    /// The extension palette (`theme.extend.colors`).
    pub fn extend_colors(&self) -> &ColorPalette {
        &self.theme.extend.colors
    }

    /// Lookup in `theme.extend.colors`, e.g. `color("blue", 600.into())`.
    pub fn color(&self, family: &str, shade: ShadeKey) -> Option<HexColor> {
        self.theme.extend.colors.color(family, shade)
    }

    /// Base palette (override or built-in) with the extension merged over it.
    pub fn resolve(&self) -> ResolvedTheme {
        ResolvedTheme::from_config(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_str_as(s: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(s),
            ConfigFormat::Json => Self::from_json_str(s),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => self.to_toml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    /// Parse a config file. Does not run [`validate`](Self::validate).
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ShadeError::NotFound(path.to_path_buf()),
            _ => ShadeError::Io(e),
        })?;
        let config = Self::from_str_as(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            families = config.extend_colors().len(),
            globs = config.content.files.len(),
            "parsed theme config"
        );
        Ok(config)
    }

    /// Parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_path(path)?;
        if let Err(report) = config.validate() {
            tracing::debug!(path = %path.display(), problems = report.len(), "theme config failed validation");
            return Err(report.into());
        }
        Ok(config)
    }

    /// Write the record in the format implied by `path`. Creates parent
    /// directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut content = self.to_string_as(format)?;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved theme config");
        Ok(())
    }
}
