//! Build mode and the scanning strategy it communicates to the build tool.

use serde::{Deserialize, Serialize};

/// Build-strategy flag from the config's `mode` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Generate utilities on demand from what content files use.
    #[default]
    Jit,
    /// Precompile the full utility set up front.
    Aot,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Jit => "jit",
            Mode::Aot => "aot",
        }
    }

    pub fn strategy(self) -> ScanStrategy {
        ScanStrategy::from(self)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How content is consumed when planning a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Scan content file by file; only used tokens are planned.
    PerFile,
    /// Plan every token of the resolved palette; content is informational.
    Precompile,
}

impl From<Mode> for ScanStrategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Jit => ScanStrategy::PerFile,
            Mode::Aot => ScanStrategy::Precompile,
        }
    }
}

impl std::fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStrategy::PerFile => write!(f, "per-file"),
            ScanStrategy::Precompile => write!(f, "precompile"),
        }
    }
}
