//! Locate a config file by walking up from a starting directory.

use std::path::{Path, PathBuf};

use shade_constant::app::{CONFIG_FILE_NAMES, CONFIG_SEARCH_DEPTH};

/// First `shade.toml` / `shade.json` found in `start` or its ancestors.
/// Within one directory TOML wins over JSON.
pub fn find_config_upward(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..CONFIG_SEARCH_DEPTH {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found theme config");
                return Some(candidate);
            }
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_config_in_ancestor() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("shade.toml"), "").unwrap();
        let nested = root.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_upward(&nested).unwrap();
        assert_eq!(found, root.path().join("shade.toml"));
    }

    #[test]
    fn test_toml_preferred_over_json() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("shade.json"), "{}").unwrap();
        fs::write(root.path().join("shade.toml"), "").unwrap();

        let found = find_config_upward(root.path()).unwrap();
        assert!(found.ends_with("shade.toml"));
    }

    #[test]
    fn test_nearest_wins() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("shade.toml"), "").unwrap();
        let inner = root.path().join("inner");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("shade.json"), "{}").unwrap();

        let found = find_config_upward(&inner).unwrap();
        assert_eq!(found, inner.join("shade.json"));
    }
}
