//! Shade Observability - logging setup shared by the shade binaries
//!
//! Installs a `tracing` subscriber with an env-driven filter and a console
//! layer on stderr (stdout is reserved for command output).
//!
//! # Quick Start
//!
//! ```no_run
//! use shade_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("shade")
//!     .with_log_level("debug");
//!
//! init(config)?;
//!
//! // Or initialize from environment variables
//! shade_observability::init_from_env()?;
//!
//! tracing::info!("config loaded");
//! # Ok::<(), shade_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `SHADE_LOG` or `RUST_LOG` - Log level filter
//! - `SHADE_LOG_FORMAT` - `json` for one JSON object per log line

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, is_initialized};
pub use self::tracing::{record_duration, record_error};

// Macros are automatically exported via #[macro_export] and available
// as shade_observability::config_span!(), etc.
