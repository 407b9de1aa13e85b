//! Configuration for logging

use serde::{Deserialize, Serialize};

use shade_constant::app::{LOG_ENV, LOG_FORMAT_ENV, NAME};

use crate::error::ObservabilityError;

/// Shape of each console log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single line
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ObservabilityError::Config(format!(
                "unknown log format '{other}' (expected pretty or json)"
            ))),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup event (e.g., "shade")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable console/log output
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "debug", "shade_scan=trace")
    /// Defaults to "warn" if not set
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub format: LogFormat,

    /// Color escapes in console output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_service_name() -> String {
    NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            format: LogFormat::Pretty,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SHADE_LOG` or `RUST_LOG` → log_level
    /// - `SHADE_LOG_FORMAT` → format (unknown values fall back to pretty)
    /// - `NO_COLOR` → disables ansi
    pub fn from_env() -> Self {
        let log_level = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        let format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level,
            format,
            ansi: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Filter directive in effect
    pub fn filter_directive(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}
