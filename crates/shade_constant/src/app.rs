//! Application metadata constants

pub const NAME: &str = "shade";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file names looked up from the working directory upward, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["shade.toml", "shade.json"];
/// Env var pointing at an explicit config file.
pub const CONFIG_ENV: &str = "SHADE_CONFIG";
/// Env var holding the log filter (falls back to RUST_LOG).
pub const LOG_ENV: &str = "SHADE_LOG";
/// Env var selecting the log line format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "SHADE_LOG_FORMAT";
/// How many parent directories the config lookup climbs.
pub const CONFIG_SEARCH_DEPTH: usize = 32;

/// Directories never descended into while scanning content.
pub const SKIPPED_DIRS: &[&str] = &["target", "node_modules", "vendor"];
/// Default cap on files visited by one scan.
pub const DEFAULT_MAX_FILES: usize = 10_000;
