//! Shared constants for shade.

pub mod app;
pub mod palette;
