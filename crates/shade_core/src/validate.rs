//! Semantic checks on a parsed record.
//!
//! Parsing already guarantees hex literals, unique shade keys, and glob
//! syntax. What remains are rules spanning several values.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::config::ThemeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("content.files is empty; nothing would be scanned")]
    EmptyContent,

    #[error("plugins[{index}] is blank")]
    BlankPlugin { index: usize },

    #[error("plugin `{name}` is listed more than once")]
    DuplicatePlugin { name: String },

    #[error("color family `{name}` must be lowercase words joined by dashes, each starting with a letter (e.g. `sky-blue2`)")]
    InvalidFamilyName { name: String },

    #[error("color family `{name}` has no shades")]
    EmptyFamily { name: String },
}

/// Every violation found in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme config ({} problem", self.violations.len())?;
        if self.violations.len() != 1 {
            f.write_str("s")?;
        }
        f.write_str(")")?;
        for v in &self.violations {
            write!(f, "\n  - {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Dash-separated lowercase segments, each starting with a letter. A digit
/// segment would read as a shade in a class like `bg-brand-2-500`.
fn is_family_name(name: &str) -> bool {
    name.split('-').all(|segment| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    })
}

impl ThemeConfig {
    /// Check cross-field rules, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut violations = Vec::new();

        if self.content.is_empty() {
            violations.push(Violation::EmptyContent);
        }

        let mut seen = HashSet::new();
        for (index, plugin) in self.plugins.iter().enumerate() {
            let name = plugin.as_str().trim();
            if name.is_empty() {
                violations.push(Violation::BlankPlugin { index });
            } else if !seen.insert(name) {
                violations.push(Violation::DuplicatePlugin {
                    name: name.to_string(),
                });
            }
        }

        let palettes = self.theme.colors.iter().chain(Some(&self.theme.extend.colors));
        for palette in palettes {
            for (name, shades) in palette.families() {
                if !is_family_name(name) {
                    violations.push(Violation::InvalidFamilyName {
                        name: name.to_string(),
                    });
                }
                if shades.is_empty() {
                    violations.push(Violation::EmptyFamily {
                        name: name.to_string(),
                    });
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::new(violations))
        }
    }
}
