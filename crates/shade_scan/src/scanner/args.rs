use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shade_constant::app::DEFAULT_MAX_FILES;
use shade_core::{ColorToken, ScanStrategy};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanOptions {
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Extra directory or file names never visited.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            exclude: Vec::new(),
        }
    }
}

impl ScanOptions {
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }
}

/// Files selected by the content globs, relative to the scan root,
/// `/`-separated and sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSet {
    pub files: Vec<String>,
    pub truncated: bool,
}

impl FileSet {
    pub fn add_file(&mut self, file: String) {
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One color-utility class found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub class: String,
    pub utility: String,
    pub token: ColorToken,
    pub line: usize,
    /// Whether the resolved palette defines `token`.
    pub known: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileScan {
    pub path: String,
    pub usages: Vec<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub strategy: ScanStrategy,
    pub files: Vec<FileScan>,
    pub truncated: bool,
}

impl ScanReport {
    pub fn new(strategy: ScanStrategy) -> Self {
        Self {
            strategy,
            files: Vec::new(),
            truncated: false,
        }
    }

    pub fn usages(&self) -> impl Iterator<Item = &Usage> + '_ {
        self.files.iter().flat_map(|f| f.usages.iter())
    }

    pub fn total_usages(&self) -> usize {
        self.files.iter().map(|f| f.usages.len()).sum()
    }

    /// Distinct tokens the palette defines.
    pub fn used_tokens(&self) -> BTreeSet<ColorToken> {
        self.usages()
            .filter(|u| u.known)
            .map(|u| u.token.clone())
            .collect()
    }

    /// Distinct tokens referenced but missing from the palette.
    pub fn unknown_tokens(&self) -> BTreeSet<ColorToken> {
        self.usages()
            .filter(|u| !u.known)
            .map(|u| u.token.clone())
            .collect()
    }
}
