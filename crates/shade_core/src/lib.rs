//! Core types for shade: the theme configuration record and everything that
//! reads, checks, and resolves it.
//!
//! The record is data only. A build tool consumes it once per invocation and
//! never mutates it.

pub mod color;
pub mod config;
pub mod content;
pub mod discover;
pub mod error;
pub mod mode;
pub mod palette;
pub mod resolve;
pub mod shade;
pub mod validate;

pub use color::{ColorParseError, HexColor};
pub use config::{ConfigFormat, ExtendSection, PluginRef, ThemeConfig, ThemeSection};
pub use content::{ContentConfig, GlobPattern};
pub use discover::find_config_upward;
pub use error::{Result, ShadeError};
pub use mode::{Mode, ScanStrategy};
pub use palette::{ColorPalette, ColorToken};
pub use resolve::ResolvedTheme;
pub use shade::{ShadeKey, ShadeParseError, Shades};
pub use validate::{ValidationReport, Violation};
