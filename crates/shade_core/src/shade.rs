//! Shade keys and the per-family shade map.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::HexColor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadeParseError {
    #[error("shade key is empty")]
    Empty,

    #[error("shade key `{0}` must be a number (e.g. 600) or DEFAULT")]
    Invalid(String),
}

/// Key of one shade within a color family: a numeric step or `DEFAULT`.
///
/// Orders `DEFAULT` first, then steps ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    Default,
    Step(u16),
}

impl ShadeKey {
    pub const DEFAULT_LABEL: &'static str = "DEFAULT";

    pub fn step(self) -> Option<u16> {
        match self {
            ShadeKey::Step(n) => Some(n),
            ShadeKey::Default => None,
        }
    }
}

impl From<u16> for ShadeKey {
    fn from(n: u16) -> Self {
        ShadeKey::Step(n)
    }
}

impl FromStr for ShadeKey {
    type Err = ShadeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ShadeParseError::Empty);
        }
        if s == Self::DEFAULT_LABEL {
            return Ok(ShadeKey::Default);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShadeParseError::Invalid(s.to_string()));
        }
        s.parse::<u16>()
            .map(ShadeKey::Step)
            .map_err(|_| ShadeParseError::Invalid(s.to_string()))
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeKey::Default => f.write_str(Self::DEFAULT_LABEL),
            ShadeKey::Step(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a numeric shade key or DEFAULT")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
                u16::try_from(v)
                    .map(ShadeKey::Step)
                    .map_err(|_| E::custom(ShadeParseError::Invalid(v.to_string())))
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

/// Shades of one color family. Keys are unique; duplicates are rejected when
/// deserializing, including keys that normalize to the same step (`050`, `50`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Shades(BTreeMap<ShadeKey, HexColor>);

impl Shades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Replaces an existing shade.
    pub fn with(mut self, key: impl Into<ShadeKey>, color: HexColor) -> Self {
        self.0.insert(key.into(), color);
        self
    }

    pub fn get(&self, key: ShadeKey) -> Option<HexColor> {
        self.0.get(&key).copied()
    }

    pub fn contains(&self, key: ShadeKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ShadeKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, HexColor)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Overlay `other` onto `self`; `other` wins per shade.
    pub fn merge(&mut self, other: &Shades) {
        for (key, color) in other.iter() {
            self.0.insert(key, color);
        }
    }
}

impl FromIterator<(ShadeKey, HexColor)> for Shades {
    fn from_iter<I: IntoIterator<Item = (ShadeKey, HexColor)>>(iter: I) -> Self {
        Shades(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Shades {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadesVisitor;

        impl<'de> Visitor<'de> for ShadesVisitor {
            type Value = Shades;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of shade key to #RRGGBB color")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Shades, A::Error> {
                let mut shades = BTreeMap::new();
                while let Some((key, color)) = map.next_entry::<ShadeKey, HexColor>()? {
                    match shades.entry(key) {
                        Entry::Occupied(_) => {
                            return Err(de::Error::custom(format!(
                                "duplicate shade key `{key}`"
                            )));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(color);
                        }
                    }
                }
                Ok(Shades(shades))
            }
        }

        deserializer.deserialize_map(ShadesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_shade_keys() {
        assert_eq!("600".parse::<ShadeKey>().unwrap(), ShadeKey::Step(600));
        assert_eq!("050".parse::<ShadeKey>().unwrap(), ShadeKey::Step(50));
        assert_eq!("DEFAULT".parse::<ShadeKey>().unwrap(), ShadeKey::Default);
        assert_eq!("".parse::<ShadeKey>(), Err(ShadeParseError::Empty));
        assert!("light".parse::<ShadeKey>().is_err());
        assert!("-100".parse::<ShadeKey>().is_err());
        assert!("70000".parse::<ShadeKey>().is_err());
    }

    #[test]
    fn test_default_sorts_first() {
        let mut keys = vec![ShadeKey::Step(900), ShadeKey::Default, ShadeKey::Step(50)];
        keys.sort();
        assert_eq!(
            keys,
            vec![ShadeKey::Default, ShadeKey::Step(50), ShadeKey::Step(900)]
        );
    }

    #[test]
    fn test_shades_deserialize_json() {
        let shades: Shades =
            serde_json::from_str(r##"{ "600": "#2563EB", "700": "#1D4ED8" }"##).unwrap();
        assert_eq!(shades.len(), 2);
        assert_eq!(shades.get(ShadeKey::Step(600)), Some(hex("#2563EB")));
    }

    #[test]
    fn test_duplicate_key_rejected_in_json() {
        let err = serde_json::from_str::<Shades>(r##"{ "600": "#2563EB", "600": "#000000" }"##)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate shade key `600`"));
    }

    #[test]
    fn test_normalized_duplicate_rejected() {
        let err = serde_json::from_str::<Shades>(r##"{ "50": "#FFFFFF", "050": "#000000" }"##)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate shade key `50`"));
    }

    #[test]
    fn test_bad_color_value_rejected() {
        let err = serde_json::from_str::<Shades>(r##"{ "600": "#25" }"##).unwrap_err();
        assert!(err.to_string().contains("six hex digits"));
    }

    #[test]
    fn test_merge_overrides_per_shade() {
        let mut base = Shades::new()
            .with(600u16, hex("#4B5563"))
            .with(700u16, hex("#374151"));
        let ext = Shades::new().with(700u16, hex("#000000")).with(950u16, hex("#030712"));
        base.merge(&ext);
        assert_eq!(base.len(), 3);
        assert_eq!(base.get(ShadeKey::Step(600)), Some(hex("#4B5563")));
        assert_eq!(base.get(ShadeKey::Step(700)), Some(hex("#000000")));
        assert!(base.contains(ShadeKey::Step(950)));
    }
}
