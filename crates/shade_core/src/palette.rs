//! Color palette: family name to shades, plus the default palette and the
//! deep merge the theme extension uses.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use shade_constant::palette::{DEFAULT_FAMILIES, FamilyTable};

use crate::color::HexColor;
use crate::shade::{ShadeKey, Shades};

/// `family -> shade -> color`. Families iterate in name order; a family
/// written twice is rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorPalette(BTreeMap<String, Shades>);

impl ColorPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in palette a theme extension is merged over.
    pub fn defaults() -> Self {
        Self::from_tables(DEFAULT_FAMILIES)
    }

    /// Build from constant `(family, [(step, "#RRGGBB")])` tables. Entries that
    /// are not valid literals are skipped with a warning.
    pub fn from_tables(tables: &[FamilyTable]) -> Self {
        let mut palette = Self::new();
        for (family, steps) in tables {
            let shades = steps
                .iter()
                .filter_map(|(step, literal)| match literal.parse::<HexColor>() {
                    Ok(color) => Some((ShadeKey::Step(*step), color)),
                    Err(e) => {
                        tracing::warn!(family = %family, step = *step, error = %e, "skipping bad palette entry");
                        None
                    }
                })
                .collect();
            palette.0.insert((*family).to_string(), shades);
        }
        palette
    }

    /// Builder-style family insert. Replaces an existing family.
    pub fn with_family(mut self, name: impl Into<String>, shades: Shades) -> Self {
        self.0.insert(name.into(), shades);
        self
    }

    pub fn family(&self, name: &str) -> Option<&Shades> {
        self.0.get(name)
    }

    pub fn color(&self, family: &str, shade: ShadeKey) -> Option<HexColor> {
        self.family(family)?.get(shade)
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.color(&token.family, token.shade).is_some()
    }

    pub fn families(&self) -> impl Iterator<Item = (&str, &Shades)> + '_ {
        self.0.iter().map(|(name, shades)| (name.as_str(), shades))
    }

    pub fn family_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of colors across all families.
    pub fn color_count(&self) -> usize {
        self.0.values().map(Shades::len).sum()
    }

    /// Every `(token, color)` pair, families by name, shades ascending.
    pub fn entries(&self) -> impl Iterator<Item = (ColorToken, HexColor)> + '_ {
        self.0.iter().flat_map(|(family, shades)| {
            shades
                .iter()
                .map(move |(shade, color)| (ColorToken::new(family.clone(), shade), color))
        })
    }

    pub fn tokens(&self) -> impl Iterator<Item = ColorToken> + '_ {
        self.entries().map(|(token, _)| token)
    }

    /// Deep merge: families missing here are added, shared families are merged
    /// shade by shade with `extension` winning.
    pub fn merge(&mut self, extension: &ColorPalette) {
        for (family, shades) in &extension.0 {
            self.0
                .entry(family.clone())
                .and_modify(|existing| existing.merge(shades))
                .or_insert_with(|| shades.clone());
        }
    }

    pub fn merged_with(&self, extension: &ColorPalette) -> ColorPalette {
        let mut merged = self.clone();
        merged.merge(extension);
        merged
    }

    /// CSS custom properties, one per line: `--color-blue-600: #2563EB;`.
    pub fn to_css_variables(&self) -> String {
        let mut out = String::from(":root {\n");
        for (token, color) in self.entries() {
            out.push_str(&format!("  --color-{token}: {color};\n"));
        }
        out.push_str("}\n");
        out
    }
}

impl<'de> Deserialize<'de> for ColorPalette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = ColorPalette;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of color family to shades")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorPalette, A::Error> {
                let mut families = BTreeMap::new();
                while let Some(name) = map.next_key::<String>()? {
                    match families.entry(name) {
                        Entry::Occupied(slot) => {
                            return Err(de::Error::custom(format!(
                                "duplicate color family `{}`",
                                slot.key()
                            )));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(map.next_value::<Shades>()?);
                        }
                    }
                }
                Ok(ColorPalette(families))
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

/// One addressable color: `blue-600`, or just `blue` for a `DEFAULT` shade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorToken {
    pub family: String,
    pub shade: ShadeKey,
}

impl ColorToken {
    pub fn new(family: impl Into<String>, shade: impl Into<ShadeKey>) -> Self {
        Self {
            family: family.into(),
            shade: shade.into(),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shade {
            ShadeKey::Default => f.write_str(&self.family),
            ShadeKey::Step(n) => write!(f, "{}-{}", self.family, n),
        }
    }
}
