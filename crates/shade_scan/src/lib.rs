//! Content scanning for shade.
//!
//! Walks the files a theme config's `content.files` globs select, pulls
//! color-utility classes (`bg-blue-600`, `hover:text-gray-300`) out of each
//! one, and turns the result into a [`BuildPlan`] for the active strategy.

pub mod extract;
pub mod plan;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use extract::{ColorCandidate, extract_candidates};
pub use plan::BuildPlan;
pub use scanner::{ContentScanner, FileScan, FileSet, ScanError, ScanOptions, ScanReport, Usage};
