mod args;
mod error;

pub use args::{FileScan, FileSet, ScanOptions, ScanReport, Usage};
pub use error::ScanError;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shade_constant::app::SKIPPED_DIRS;
use shade_core::{ColorToken, ContentConfig, ResolvedTheme, ShadeKey};
use tokio::fs;

use crate::extract::extract_candidates;

/// Walks the files a [`ContentConfig`] selects under a root directory.
pub struct ContentScanner {
    root: Arc<PathBuf>,
    content: ContentConfig,
    options: ScanOptions,
}

impl ContentScanner {
    pub fn new(root: PathBuf, content: ContentConfig) -> Self {
        Self {
            root: Arc::new(root),
            content,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn rel_path(&self, path: &Path) -> String {
        path.strip_prefix(&*self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Some pattern's literal prefix lies at or below `rel_dir`, or above it.
    fn may_contain_matches(&self, rel_dir: &str) -> bool {
        self.content.files.iter().any(|pattern| {
            let prefix = pattern.literal_prefix();
            prefix.is_empty()
                || prefix == rel_dir
                || prefix
                    .strip_prefix(rel_dir)
                    .is_some_and(|rest| rest.starts_with('/'))
                || (pattern.has_wildcards()
                    && rel_dir
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/')))
        })
    }

    /// Hidden and build-output dirs are skipped unless a pattern names them
    /// explicitly in its literal prefix.
    fn is_skipped_dir(&self, rel_dir: &str, dir_name: &str) -> bool {
        if self.options.exclude.iter().any(|e| e == dir_name) {
            return true;
        }
        let conventional = dir_name.starts_with('.') || SKIPPED_DIRS.contains(&dir_name);
        if !conventional {
            return false;
        }
        !self.content.files.iter().any(|pattern| {
            let prefix = pattern.literal_prefix();
            prefix == rel_dir
                || prefix
                    .strip_prefix(rel_dir)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    fn is_excluded_file(&self, file_name: &str) -> bool {
        self.options.exclude.iter().any(|e| e == file_name)
    }

    async fn walk_directory(&self, dir: &Path, result: &mut FileSet) -> Result<(), ScanError> {
        let mut entries = fs::read_dir(dir).await?;
        let mut children = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            children.push(entry.path());
        }
        children.sort();

        for path in children {
            let rel_path = self.rel_path(&path);
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

            if path.is_dir() {
                if self.is_skipped_dir(&rel_path, name) || !self.may_contain_matches(&rel_path) {
                    continue;
                }
                Box::pin(self.walk_directory(&path, result)).await?;
                if result.truncated {
                    return Ok(());
                }
            } else if path.is_file()
                && !self.is_excluded_file(name)
                && self.content.matches(&rel_path)
            {
                // only a match that doesn't fit marks the set partial
                if result.files.len() >= self.options.max_files {
                    result.truncated = true;
                    return Ok(());
                }
                result.add_file(rel_path);
            }
        }

        Ok(())
    }

    /// Files matched by any content glob, sorted, capped at `max_files`.
    pub async fn files(&self) -> Result<FileSet, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::InvalidRoot(self.root.display().to_string()));
        }

        let mut result = FileSet::default();
        self.walk_directory(&self.root, &mut result).await?;
        result.files.sort();

        tracing::debug!(
            root = %self.root.display(),
            files = result.len(),
            truncated = result.truncated,
            "content files collected"
        );
        Ok(result)
    }

    async fn scan_file(
        &self,
        rel_path: &str,
        theme: &ResolvedTheme,
    ) -> Result<Option<FileScan>, ScanError> {
        let path = self.root.join(rel_path);
        let source = match fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::debug!(path = %rel_path, "skipping non-UTF-8 file");
                return Ok(None);
            }
            Err(e) => {
                return Err(ScanError::ReadError {
                    path: rel_path.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let mut usages = Vec::new();
        for candidate in extract_candidates(&source) {
            let token = match candidate.shade {
                Some(shade) => ColorToken::new(candidate.family.clone(), shade),
                // a bare `text-brand` only counts when the family has a DEFAULT
                None => {
                    let token = ColorToken::new(candidate.family.clone(), ShadeKey::Default);
                    if !theme.contains(&token) {
                        continue;
                    }
                    token
                }
            };
            let known = theme.contains(&token);
            usages.push(Usage {
                class: candidate.class,
                utility: candidate.utility,
                token,
                line: candidate.line,
                known,
            });
        }

        Ok(Some(FileScan {
            path: rel_path.to_string(),
            usages,
        }))
    }

    /// Scan every content file, one at a time, for color utilities and check
    /// each against the resolved palette.
    pub async fn scan(&self, theme: &ResolvedTheme) -> Result<ScanReport, ScanError> {
        let file_set = self.files().await?;
        let mut report = ScanReport::new(theme.strategy());
        report.truncated = file_set.truncated;

        for rel_path in &file_set.files {
            if let Some(file_scan) = self.scan_file(rel_path, theme).await? {
                report.files.push(file_scan);
            }
        }

        tracing::info!(
            strategy = %report.strategy,
            files = report.files.len(),
            usages = report.total_usages(),
            unknown = report.unknown_tokens().len(),
            "content scan finished"
        );
        Ok(report)
    }
}
