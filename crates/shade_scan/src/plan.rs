//! What a build would include for the active strategy.

use std::collections::BTreeSet;

use serde::Serialize;
use shade_core::{ColorToken, HexColor, ResolvedTheme, ScanStrategy};

use crate::scanner::ScanReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub strategy: ScanStrategy,
    pub tokens: BTreeSet<ColorToken>,
}

impl BuildPlan {
    /// Per-file: only palette tokens the scan found. Precompile: the whole
    /// resolved palette, regardless of content.
    pub fn new(theme: &ResolvedTheme, report: Option<&ScanReport>) -> Self {
        let strategy = theme.strategy();
        let tokens = match strategy {
            ScanStrategy::PerFile => report.map(ScanReport::used_tokens).unwrap_or_default(),
            ScanStrategy::Precompile => theme.tokens().collect(),
        };
        Self { strategy, tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.tokens.contains(token)
    }

    /// Planned tokens paired with their colors.
    pub fn colors<'a>(
        &'a self,
        theme: &'a ResolvedTheme,
    ) -> impl Iterator<Item = (&'a ColorToken, HexColor)> + 'a {
        self.tokens
            .iter()
            .filter_map(move |t| theme.color(&t.family, t.shade).map(|c| (t, c)))
    }
}
